use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use vdb_application::{error::AppError, prelude as flows, sqlite};
use vdb_core::{entities::*, usecases};

use crate::{
    adapters::json::{self, from_json, to_json},
    config::Config,
};

const EXIT_CODE_INVALID_INPUT: u8 = 2;
const EXIT_CODE_FORBIDDEN: u8 = 3;
const EXIT_CODE_NOT_FOUND: u8 = 4;

#[derive(Parser)]
#[command(name = "venuedb", version, about = "Catalog of restaurants, cafés and bars")]
struct Cli {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL of the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Identity of the acting user.
#[derive(Args)]
struct Identity {
    #[arg(long)]
    user_id: String,
    #[arg(long, default_value = "user")]
    role: Role,
}

impl From<Identity> for Actor {
    fn from(from: Identity) -> Self {
        let Identity { user_id, role } = from;
        Self {
            id: user_id.into(),
            role,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List approved locations
    List {
        #[arg(long)]
        page: Option<u64>,
        #[arg(long)]
        limit: Option<u64>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        price_range: Option<PriceRange>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        search: Option<String>,
        /// Only locations with votes for all of these tags
        #[arg(long = "tag", value_name = "TAG_ID")]
        tags: Vec<String>,
    },
    /// Show an approved location
    Get { id: String },
    /// Submit a new location for moderation
    Create {
        /// JSON file with the new location
        file: PathBuf,
        #[command(flatten)]
        identity: Identity,
    },
    /// Modify a location
    Update {
        id: String,
        /// JSON file with the modified fields
        file: PathBuf,
        #[command(flatten)]
        identity: Identity,
    },
    /// Delete a location (admins only)
    Delete {
        id: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// Change the moderation status of a location (admins only)
    Review {
        id: String,
        status: ModerationStatus,
        #[command(flatten)]
        identity: Identity,
    },
    /// List all tags
    Tags,
    /// Show a single tag
    Tag { id: String },
    /// Vote for a tag of a location
    Vote {
        location_id: String,
        tag_id: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// Withdraw a vote
    Unvote {
        location_id: String,
        tag_id: String,
        #[command(flatten)]
        identity: Identity,
    },
    /// Show the vote counts of a location
    Stats {
        location_id: String,
        /// Flag the tags this user voted for
        #[arg(long)]
        viewer: Option<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<AppError>() {
        if err.is_not_found() {
            return EXIT_CODE_NOT_FOUND;
        }
        if err.is_forbidden() {
            return EXIT_CODE_FORBIDDEN;
        }
        if err.is_invalid_input() {
            return EXIT_CODE_INVALID_INPUT;
        }
    }
    if err.downcast_ref::<serde_json::Error>().is_some() {
        return EXIT_CODE_INVALID_INPUT;
    }
    1
}

fn execute(cli: Cli) -> Result<()> {
    let Cli {
        config,
        db_url,
        command,
    } = cli;
    let mut cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::debug!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = sqlite::Connections::init(
        &cfg.db.conn_sqlite,
        cfg.db.conn_pool_size.into(),
        cfg.db.conn_timeout,
    )?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command {
        Command::List {
            page,
            limit,
            cuisine,
            district,
            price_range,
            category,
            search,
            tags,
        } => {
            let req = usecases::LocationListRequest {
                page,
                limit,
                cuisine,
                district,
                price_range,
                category,
                search,
                tags: tags.into_iter().map(Id::from).collect(),
            };
            let page = flows::list_locations(&connections, &req, cfg.catalog.default_page_limit)?;
            print_json(&to_json::location_page(page))
        }
        Command::Get { id } => {
            let details = flows::get_location(&connections, &id)?;
            print_json(&to_json::location_details(details))
        }
        Command::Create { file, identity } => {
            let new_location = from_json::new_location(read_json(&file)?);
            let location = flows::create_location(&connections, new_location, &identity.into())?;
            print_json(&json::Location::from(location))
        }
        Command::Update { id, file, identity } => {
            let patch = from_json::update_location(read_json(&file)?);
            let location = flows::update_location(&connections, &id, patch, &identity.into())?;
            print_json(&json::Location::from(location))
        }
        Command::Delete { id, identity } => {
            flows::delete_location(&connections, &id, &identity.into())?;
            Ok(())
        }
        Command::Review {
            id,
            status,
            identity,
        } => {
            let location = flows::review_location(&connections, &id, status, &identity.into())?;
            print_json(&json::Location::from(location))
        }
        Command::Tags => {
            let catalog = flows::load_tags(&connections)?;
            print_json(&to_json::tag_catalog(catalog))
        }
        Command::Tag { id } => {
            let tag = flows::get_tag(&connections, &id)?;
            print_json(&json::Tag::from(tag))
        }
        Command::Vote {
            location_id,
            tag_id,
            identity,
        } => {
            flows::vote_tag(&connections, &location_id, &tag_id, &identity.into())?;
            Ok(())
        }
        Command::Unvote {
            location_id,
            tag_id,
            identity,
        } => {
            flows::unvote_tag(&connections, &location_id, &tag_id, &identity.into())?;
            Ok(())
        }
        Command::Stats {
            location_id,
            viewer,
        } => {
            let viewer = viewer.map(Id::from);
            let stats = flows::tag_stats(&connections, &location_id, viewer.as_ref())?;
            print_json(&to_json::tag_stats(stats))
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid payload in {}", path.display()))?;
    Ok(value)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_command_line() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_identity_and_filters() {
        let cli = Cli::try_parse_from([
            "venuedb",
            "list",
            "--price-range",
            "100-300k",
            "--category",
            "cafe",
            "--tag",
            "an-ngon",
            "--tag",
            "view-dep",
        ])
        .unwrap();
        let Command::List {
            price_range,
            category,
            tags,
            ..
        } = cli.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(Some(PriceRange::From100kTo300k), price_range);
        assert_eq!(Some(Category::Cafe), category);
        assert_eq!(vec!["an-ngon", "view-dep"], tags);

        let cli = Cli::try_parse_from([
            "venuedb", "review", "loc", "approved", "--user-id", "adm", "--role", "admin",
        ])
        .unwrap();
        let Command::Review {
            status, identity, ..
        } = cli.command
        else {
            panic!("unexpected command");
        };
        assert_eq!(ModerationStatus::Approved, status);
        let actor = Actor::from(identity);
        assert!(actor.is_admin());
    }

    #[test]
    fn default_role_is_user() {
        let cli =
            Cli::try_parse_from(["venuedb", "vote", "loc", "an-ngon", "--user-id", "u1"]).unwrap();
        let Command::Vote { identity, .. } = cli.command else {
            panic!("unexpected command");
        };
        assert_eq!(Role::User, identity.role);
    }

    #[test]
    fn map_errors_to_exit_codes() {
        let not_found: anyhow::Error =
            AppError::from(usecases::Error::Repo(vdb_core::repositories::Error::NotFound)).into();
        assert_eq!(EXIT_CODE_NOT_FOUND, exit_code(&not_found));
        let forbidden: anyhow::Error = AppError::from(usecases::Error::Forbidden).into();
        assert_eq!(EXIT_CODE_FORBIDDEN, exit_code(&forbidden));
        let invalid: anyhow::Error = AppError::from(usecases::Error::Name).into();
        assert_eq!(EXIT_CODE_INVALID_INPUT, exit_code(&invalid));
        let payload = serde_json::from_str::<json::NewLocation>("{}").unwrap_err();
        let payload = anyhow::Error::from(payload).context("Invalid payload");
        assert_eq!(EXIT_CODE_INVALID_INPUT, exit_code(&payload));
        assert_eq!(1, exit_code(&anyhow::anyhow!("disk full")));
    }
}
