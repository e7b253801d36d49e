//! Drives the counter demo from the command line.
//!
//! Every sink write is printed as `sink: <text>`, followed by the final HTML.

#![allow(missing_docs)]

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;
    use std::rc::Rc;

    use anyhow::{Context, Result};
    use clap::Parser;
    use counter::App;
    use counter::script::{parse_script, run_step};
    use snapshot::prelude::*;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser, Debug)]
    #[command(about = "Click through the counter demo and print what it logs")]
    struct Args {
        /// Comma-separated steps: inc, log, memo-log, inc-log, settle, dispatch:<label>
        #[arg(long, default_value = "inc,inc,log,memo-log")]
        script: String,

        /// TOML file with runtime configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the rendered HTML after each step
        #[arg(long)]
        print_html: bool,
    }

    fn load_config(path: Option<&PathBuf>) -> Result<RuntimeConfig> {
        let Some(path) = path else {
            return Ok(RuntimeConfig::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        RuntimeConfig::from_toml_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Records writes for printing and mirrors them to the log
    struct EchoSink {
        memory: MemorySink,
    }

    impl Sink for EchoSink {
        fn write(&self, text: &str) -> snapshot::Result<()> {
            TracingSink.write(text)?;
            self.memory.write(text)
        }
    }

    pub(crate) fn run() -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let args = Args::parse();
        let config = load_config(args.config.as_ref())?;
        let steps = parse_script(&args.script).context("parsing --script")?;

        let memory = MemorySink::new();
        let sink = Rc::new(EchoSink {
            memory: memory.clone(),
        });
        let mut runtime = Runtime::with_config(App, sink, config);
        tracing::info!(config = ?runtime.config(), "runtime configured");

        let initial = runtime.mount().to_string();
        if args.print_html {
            println!("{initial}");
        }

        for step in &steps {
            let seen = memory.writes().len();
            run_step(&mut runtime, step).with_context(|| format!("step {step:?}"))?;

            for text in memory.writes().iter().skip(seen) {
                println!("sink: {text}");
            }
            if args.print_html {
                if let Some(html) = runtime.html() {
                    println!("{html}");
                }
            }
        }

        if let Some(html) = runtime.html() {
            println!("{html}");
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

// The browser build starts from `counter::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
