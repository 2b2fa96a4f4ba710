use clap::Parser;

/// Aggregates survey exports into chart descriptions, for one year or compared with another year.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the survey exports and the charts to render.
    /// The other options override the values of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, repeatable) A survey export. The name of the file without extension is the year
    /// (2025.csv contains the responses of 2025).
    #[clap(short, long, value_parser)]
    pub input: Vec<String>,

    /// (csv or xlsx) The type of the inputs. By default, guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default: latest year) The year to display.
    #[clap(short, long, value_parser)]
    pub year: Option<String>,

    /// If specified, the charts compare the displayed year with this year.
    #[clap(long, value_parser)]
    pub compare_year: Option<String>,

    /// (chart identifier, repeatable) The charts to render. All the charts by default.
    /// See --list for the identifiers.
    #[clap(long, value_parser)]
    pub chart: Vec<String>,

    /// (file path, 'stdout' or empty) If specified, the charts will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected charts in JSON format. If provided, surveydash will
    /// check that the rendered output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// Lists the available charts and exits.
    #[clap(long, takes_value = false)]
    pub list: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
