use std::io::Write;

use clap::Parser;

use arbor_cli::Args;

fn main() {
    let args = Args::parse();

    let tracing_handle = arbor_tracing::TracingBuilder::default()
        .level(args.log_level)
        .build()
        .expect("unable to set up tracing");

    let mut stdout = tracing_handle.get_stdout_writer().lock();
    if let Err(e) = arbor_cli::run(&args, &mut stdout) {
        let _ = writeln!(tracing_handle.get_stderr_writer(), "error: {}", e);
        std::process::exit(1);
    }
}
