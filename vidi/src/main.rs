// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use anyhow::{bail, Result};
use clap::Parser;

use vidi::{tracer::Tracer, xlat::XlatStyle};

#[derive(Parser)]
#[command(name = "vidi", about = "Trace the V4L2 ioctl traffic of a process", version)]
struct Cli {
    /// Attach to a running process instead of spawning one
    #[arg(short, long, conflicts_with = "command")]
    pid: Option<i32>,

    /// How to render symbolic constants
    #[arg(long, value_enum, default_value_t = XlatStyle::Symbolic)]
    xlat: XlatStyle,

    /// Command to spawn and trace
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut tracer = Tracer::new(cli.xlat);
    let child = match cli.pid {
        Some(pid) => tracer.attach(pid)?,
        None if !cli.command.is_empty() => tracer.spawn(&cli.command)?,
        None => bail!("specify a command to run or --pid to attach to"),
    };

    let stdout = std::io::stdout();
    tracer.run(child, &mut stdout.lock())
}
