#[macro_use]
extern crate err_derive;
#[macro_use]
extern crate log;

mod errors;

use crate::errors::CliError;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use fs_testing::{Config, FileSystem, FsSpecific, FsSpecificExt, UnsupportedFileSystem};
use log::LevelFilter;
use std::process::exit;

fn main() {
    let matches = App::new("fs-testing")
        .about("prints the commands and fsck outcomes used to crash test a file system")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("fs")
                .short("t")
                .long("fs")
                .help("the file system to inspect: ext4, btrfs, f2fs, or xfs")
                .takes_value(true)
                .conflicts_with("config"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .help("env file defining FS_TYPE, DEVICE, and optionally TARGET")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("increases the log level; may be given twice")
                .multiple(true),
        )
        .subcommand(SubCommand::with_name("list").about("lists the supported file systems"))
        .subcommand(
            SubCommand::with_name("mkfs")
                .about("prints the command which formats a device")
                .arg(Arg::with_name("device").help("defaults to DEVICE from the config")),
        )
        .subcommand(
            SubCommand::with_name("fsck")
                .about("prints the command which checks a file system")
                .arg(Arg::with_name("path").help("defaults to TARGET or DEVICE from the config")),
        )
        .subcommand(
            SubCommand::with_name("mount-opts")
                .about("prints the mount options to use after a crash is replayed"),
        )
        .subcommand(
            SubCommand::with_name("classify")
                .about("prints the outcome of a raw fsck exit status")
                .arg(Arg::with_name("status").required(true).allow_hyphen_values(true)),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // Records are already written to stderr by the logger itself.
    if let Err(why) = fs_testing::log(level, |_level, _message| ()) {
        eprintln!("fs-testing: failed to initialize logging: {}", why);
    }

    if let Err(why) = run(&matches) {
        eprintln!("fs-testing: {}", why);
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        ("list", _) => {
            for fs in &FileSystem::ALL {
                println!("{}", fs);
            }
        }
        ("mkfs", Some(args)) => {
            let (fs, config) = configured(matches)?;
            let device = match (args.value_of("device"), config.as_ref()) {
                (Some(device), _) => device.to_owned(),
                (None, Some(config)) => config.device_str()?.to_owned(),
                (None, None) => return Err(CliError::NoPath { arg: "device" }),
            };
            println!("{}", fs.mkfs_command(&device));
        }
        ("fsck", Some(args)) => {
            let (fs, config) = configured(matches)?;
            let path = match (args.value_of("path"), config.as_ref()) {
                (Some(path), _) => path.to_owned(),
                (None, Some(config)) => config.fsck_path_str()?.to_owned(),
                (None, None) => return Err(CliError::NoPath { arg: "path" }),
            };
            println!("{}", fs.fsck_command(&path));
        }
        ("mount-opts", _) => {
            let (fs, _) = configured(matches)?;
            println!("{}", fs.post_replay_mount_options());
        }
        ("classify", Some(args)) => {
            let (fs, _) = configured(matches)?;
            let value = args.value_of("status").unwrap_or_default();
            let status = value
                .parse::<i32>()
                .map_err(|_| CliError::InvalidStatus { value: value.to_owned() })?;
            println!("{}", fs.fsck_outcome(status));
        }
        _ => unreachable!("clap requires a subcommand"),
    }

    Ok(())
}

/// Resolves the file system chosen by `--fs`, or by the config given with `--config`.
fn configured(matches: &ArgMatches) -> Result<(FsSpecific, Option<Config>), CliError> {
    let (name, config) = match (matches.value_of("fs"), matches.value_of("config")) {
        (Some(name), _) => (name.to_owned(), None),
        (None, Some(path)) => {
            let config = Config::from_env_file(path)?;
            (config.fs_type.clone(), Some(config))
        }
        (None, None) => return Err(CliError::NoFileSystem),
    };

    let fs = fs_testing::resolve(&name).ok_or_else(|| UnsupportedFileSystem { name })?;
    debug!("resolved {} from the command line", fs.fs_type_str());
    Ok((fs, config))
}
