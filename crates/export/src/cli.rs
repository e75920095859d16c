use camino::Utf8PathBuf;
use clap::Parser;

/// Mirror the files of all your Stud.IP courses to disk
#[derive(Parser, Debug)]
#[command(name = "studip-export", version, about)]
pub struct Args {
    /// Config file to use, instead of the one in your XDG config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Directory to mirror into. Overrides `output_dir` from the config.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<Utf8PathBuf>,

    /// Only mirror the course with this ID. Can be given more than once.
    #[arg(long = "course", value_name = "ID")]
    pub courses: Vec<String>,

    /// Log debug output, including API responses
    #[arg(short, long)]
    pub verbose: bool,
}
