use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use cipherlab::cli;

fn command() -> Command {
    let version = version::version_info().to_string();

    let arg_algorithm =
        Arg::new("ALGORITHM").value_name("ALGORITHM").help("Algorithm tag").required(true);
    let arg_text = Arg::new("TEXT").value_name("TEXT").help("Input text").required(true);
    let arg_key = Arg::new("KEY")
        .short('k')
        .long("key")
        .value_name("KEY")
        .help("Key or passphrase (algorithm-specific default if omitted)");
    let arg_json =
        Arg::new("json").long("json").action(ArgAction::SetTrue).help("Emit a JSON payload");

    let encrypt = Command::new("encrypt")
        .about("Encrypt text with an algorithm")
        .arg(arg_algorithm.clone())
        .arg(arg_text.clone())
        .arg(arg_key.clone())
        .arg(arg_json.clone())
        .arg_required_else_help(true);

    let decrypt = Command::new("decrypt")
        .about("Decrypt text with an algorithm")
        .arg(arg_algorithm.clone())
        .arg(arg_text.clone())
        .arg(arg_key)
        .arg(arg_json.clone())
        .arg_required_else_help(true);

    let hash = Command::new("hash")
        .about("Digest text with a one-way hash")
        .arg(arg_algorithm)
        .arg(arg_text)
        .arg(arg_json.clone())
        .arg_required_else_help(true);

    let algorithms =
        Command::new("algorithms").about("List the algorithm catalog").arg(arg_json);

    let show = Command::new("show")
        .about("Show one catalog entry with its steps")
        .arg(Arg::new("NAME").value_name("NAME").help("Algorithm name").required(true))
        .arg_required_else_help(true);

    Command::new("cipherlab")
        .about("An encryption playground")
        .version(version)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encrypt)
        .subcommand(decrypt)
        .subcommand(hash)
        .subcommand(algorithms)
        .subcommand(show)
}

fn main() -> Result<ExitCode> {
    let matches = command().get_matches();
    match matches.subcommand() {
        Some(("encrypt", sub_matches)) => {
            let algorithm = sub_matches.get_one::<String>("ALGORITHM").expect("required");
            let text = sub_matches.get_one::<String>("TEXT").expect("required");
            let maybe_key = sub_matches.get_one::<String>("KEY").map(String::as_str);
            let json = sub_matches.get_flag("json");
            cli::encrypt(algorithm, text, maybe_key, json)
        }
        Some(("decrypt", sub_matches)) => {
            let algorithm = sub_matches.get_one::<String>("ALGORITHM").expect("required");
            let text = sub_matches.get_one::<String>("TEXT").expect("required");
            let maybe_key = sub_matches.get_one::<String>("KEY").map(String::as_str);
            let json = sub_matches.get_flag("json");
            cli::decrypt(algorithm, text, maybe_key, json)
        }
        Some(("hash", sub_matches)) => {
            let algorithm = sub_matches.get_one::<String>("ALGORITHM").expect("required");
            let text = sub_matches.get_one::<String>("TEXT").expect("required");
            let json = sub_matches.get_flag("json");
            cli::hash(algorithm, text, json)
        }
        Some(("algorithms", sub_matches)) => {
            let json = sub_matches.get_flag("json");
            cli::algorithms(json)
        }
        Some(("show", sub_matches)) => {
            let name = sub_matches.get_one::<String>("NAME").expect("required");
            cli::show(name)
        }
        Some((&_, _)) => panic!(),
        None => panic!(),
    }
}

mod version {
    use std::fmt;

    pub struct CommitInfo {
        pub short_commit_hash: String,
        pub commit_hash: String,
        pub commit_date: String,
    }

    pub struct VersionInfo {
        pub version: String,
        pub commit_info: Option<CommitInfo>,
    }

    impl fmt::Display for VersionInfo {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.version)?;
            if let Some(ref ci) = self.commit_info {
                write!(f, " ({} {})", ci.short_commit_hash, ci.commit_date)?;
            };
            Ok(())
        }
    }

    macro_rules! option_env_str {
        ($name:expr) => {
            option_env!($name).map(ToString::to_string)
        };
    }

    pub fn version_info() -> VersionInfo {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let commit_info = option_env_str!("CIPHERLAB_COMMIT_HASH").map(|commit_hash| {
            let short_commit_hash = option_env_str!("CIPHERLAB_COMMIT_SHORT_HASH").unwrap();
            let commit_date = option_env_str!("CIPHERLAB_COMMIT_DATE").unwrap();
            CommitInfo { short_commit_hash, commit_hash, commit_date }
        });
        VersionInfo { version, commit_info }
    }
}
