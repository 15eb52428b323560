//! Binary entry point. Parses the CLI, initializes logging, and dispatches
//! to the one subcommand that drives the interpreter or the hash
//! primitive directly — everything else a full node would need (sync,
//! p2p, RPC) is out of scope (spec.md §1).

use clap::Parser;
use ethrex::cli::{Subcommand, CLI};
use ethrex::initializers::init_tracing;
use ethrex_levm::{stack::Stack, Tracer, Vm};
use tracing::info;

struct StepTracer;

impl Tracer for StepTracer {
    fn step(&mut self, pc: u32, opcode: u8, stack: &Stack, gas_left: i64) {
        let top = stack.peek(0).ok();
        info!(
            "pc={pc} opcode={opcode:#04x} gas_left={gas_left} depth={} top={top:?}",
            stack.len()
        );
    }
}

fn parse_hex_code(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim().strip_prefix("0x").unwrap_or(input.trim());
    Ok(hex::decode(trimmed)?)
}

fn main() -> anyhow::Result<()> {
    let cli = CLI::parse();
    init_tracing(&cli.opts);

    match cli.command {
        Subcommand::Run {
            code,
            code_file,
            gas,
            trace,
        } => {
            let code = match (code, code_file) {
                (Some(hex), None) => parse_hex_code(&hex)?,
                (None, Some(path)) => parse_hex_code(&std::fs::read_to_string(path)?)?,
                (None, None) => anyhow::bail!("one of --code or --code-file is required"),
                (Some(_), Some(_)) => unreachable!("clap rejects both at once"),
            };
            let mut vm = Vm::new(code, gas);
            let report = if trace {
                let mut tracer = StepTracer;
                vm.run(Some(&mut tracer))?
            } else {
                vm.run(None)?
            };

            println!("success:     {}", report.is_success());
            println!("gas used:    {}", report.gas_used);
            println!("gas left:    {}", report.gas_left);
            println!("return data: 0x{}", hex::encode(&report.return_data));
            println!("logs:        {}", report.logs.len());
            for (i, log) in report.logs.iter().enumerate() {
                println!(
                    "  log[{i}]: topics={:?} data=0x{}",
                    log.topics,
                    hex::encode(&log.data)
                );
            }
        }
        Subcommand::Keccak { data } => {
            let digest = ethrex_crypto::keccak256(data.as_bytes());
            println!("0x{}", hex::encode(digest));
        }
    }

    Ok(())
}
