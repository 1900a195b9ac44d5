use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile section to read settings from
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Page document (JSON element tree)
    #[clap(short = 'd', long, help = "page document to load")]
    document: PathBuf,

    /// User actions to replay; the page is only loaded when omitted
    #[clap(short = 's', long, help = "script of user actions")]
    script: Option<PathBuf>,

    /// Initial URL fragment, e.g. '#resume'
    #[clap(short = 'f', long, default_value = "", help = "initial URL fragment")]
    fragment: String,

    #[clap(long, help = "sleep through script waits instead of skipping time")]
    realtime: bool,

    #[clap(long, help = "print the final state as JSON")]
    json: bool,

    #[clap(short = 'v', long, help = "trace view events while running")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    document: PathBuf,
    script: Option<PathBuf>,
    fragment: String,
    realtime: bool,
    json: bool,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            document: args.document,
            script: args.script,
            fragment: args.fragment,
            realtime: args.realtime,
            json: args.json,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn document(&self) -> &PathBuf {
        &self.document
    }

    pub fn script(&self) -> Option<&PathBuf> {
        self.script.as_ref()
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn realtime(&self) -> bool {
        self.realtime
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
