//! family-data CLI - convert the family tree CSV export to JSON
//!
//! ```bash
//! family-data                              # family_data.csv -> family_data.json
//! family-data -i people.csv -o tree.json   # explicit paths
//! family-data --ragged pad                 # pad short rows instead of failing
//! ```

use clap::Parser;
use family_data::logs::{self, log_error, Verbosity};
use family_data::{
    convert, ConvertOptions, RaggedRows, DEFAULT_INPUT_FILE, DEFAULT_LIST_FIELD,
    DEFAULT_OUTPUT_FILE,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "family-data")]
#[command(about = "Convert family_data.csv to the JSON array used by the family tree", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Output JSON file (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Column holding comma-separated ids to turn into a list
    #[arg(long, default_value = DEFAULT_LIST_FIELD)]
    field: String,

    /// What to do with rows whose field count differs from the header
    #[arg(long, value_enum, default_value_t = RaggedRows::Reject)]
    ragged: RaggedRows,

    /// Only print warnings, errors and the final result
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            list_field: self.field.clone(),
            ragged: self.ragged,
        }
    }
}

/// Run one conversion and return the process exit code.
///
/// The result line goes to `out`; fatal errors go to stderr.
fn run(cli: &Cli, out: &mut impl Write) -> i32 {
    match convert(&cli.options()) {
        Ok(summary) => {
            let _ = writeln!(
                out,
                "Success! Converted {} records to '{}'.",
                summary.count(),
                summary.output_path.display()
            );
            0
        }
        Err(e) if e.is_not_found() => {
            let _ = writeln!(out, "Error: {}", e);
            0
        }
        Err(e) => {
            log_error(format!("Error: {}", e));
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logs::init(if cli.quiet { Verbosity::Quiet } else { Verbosity::Normal });

    let code = run(&cli, &mut std::io::stdout().lock());
    std::process::exit(code);
}
