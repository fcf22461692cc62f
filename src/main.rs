reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(metadata);
reexport!(parser);
reexport!(generate);
reexport!(reader);
reexport!(output);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate TypeScript enums, classes and Express routers from MySQL
/// `CREATE TABLE` statements.
#[derive(Parser, Debug)]
#[command(name = "ddl2ts", version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQL file with CREATE TABLE statements
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory for the generated files
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// File with `child extends parent` lines
    #[arg(long, value_name = "FILE")]
    inheritance: Option<PathBuf>,

    /// Skip anything before CREATE TABLE and ignore trailing tokens
    #[arg(long)]
    lenient: bool,

    /// Stop at the first statement that fails to parse
    #[arg(long)]
    fail_fast: bool,

    /// Also write metadata.json
    #[arg(long)]
    emit_json: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(out_dir) = self.out_dir {
            config.out_dir = out_dir;
        }
        if self.inheritance.is_some() {
            config.inheritance = self.inheritance;
        }
        config.lenient |= self.lenient;
        config.fail_fast |= self.fail_fast;
        config.emit_json |= self.emit_json;
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let result = Config::load(args.config.as_deref()).and_then(|mut config| {
        args.apply(&mut config);
        run(&config)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Parse every statement, skipping the ones that fail unless `fail_fast` is
/// set.
fn parse_all(statements: &[String], config: &Config) -> Result<Vec<TableMetadata>> {
    let mode = config.parse_mode();
    let mut tables = Vec::with_capacity(statements.len());
    for (index, sql) in statements.iter().enumerate() {
        match parse_statement(sql, mode) {
            Ok(table) => tables.push(table),
            Err(err) if config.fail_fast => return Err(Error::parse(index, err)),
            Err(err) => warn!("Skipping statement {index}: {err}"),
        }
    }
    Ok(tables)
}

fn run(config: &Config) -> Result {
    let statements = read_statements(&config.input)?;
    let tables = parse_all(&statements, config)?;
    let inheritance = match &config.inheritance {
        Some(path) => Inheritance::load(path)?,
        None => Inheritance::default(),
    };

    let mut files = generate_all(&tables, &inheritance);
    if config.emit_json {
        files.push(metadata_json(&tables)?);
    }
    write_files(&config.out_dir, &files)?;
    info!(
        "Wrote {} files for {} of {} statements to {}",
        files.len(),
        tables.len(),
        statements.len(),
        config.out_dir.display()
    );
    Ok(())
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
