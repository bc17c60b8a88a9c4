use clap::Parser;
use uxbind::cli::{Args, run};

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    for result in run(&args)? {
        if args.stdout {
            print!("{result}");
        } else {
            println!("{result}");
        }
    }

    Ok(())
}
