//! Command runner for the engine binary.

use std::path::PathBuf;

use anyhow::Context;
use personstore_domain::{Person, PersonId, ServerConfig};

use crate::app::App;

pub const USAGE: &str = "Usage: personstore-engine <command>

Commands:
  save <full_name> <phone> <currency> <price>
  seed
  load <id>
  list
  write-config <path> <host> <port>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Save(Person),
    /// Save a sample person with a random price.
    Seed,
    Load(PersonId),
    List,
    WriteConfig { path: PathBuf, config: ServerConfig },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            Some("save") => {
                let full_name = required(&mut args, "full_name")?;
                let phone = required(&mut args, "phone")?;
                let currency = required(&mut args, "currency")?;
                let price: f64 = required(&mut args, "price")?
                    .parse()
                    .context("price must be a number")?;
                Self::Save(Person::new(full_name, phone, currency, price))
            }
            Some("seed") => Self::Seed,
            Some("load") => {
                let id: PersonId = required(&mut args, "id")?.parse()?;
                Self::Load(id)
            }
            Some("list") => Self::List,
            Some("write-config") => {
                let path = PathBuf::from(required(&mut args, "path")?);
                let host = required(&mut args, "host")?;
                let port = required(&mut args, "port")?;
                Self::WriteConfig {
                    path,
                    config: ServerConfig::new(host, port),
                }
            }
            Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
            None => anyhow::bail!(USAGE),
        };

        if let Some(extra) = args.next() {
            anyhow::bail!("Unexpected argument: {extra}\n\n{USAGE}");
        }
        Ok(command)
    }
}

fn required(args: &mut impl Iterator<Item = String>, name: &str) -> anyhow::Result<String> {
    args.next()
        .with_context(|| format!("missing argument <{name}>\n\n{USAGE}"))
}

/// Execute a command and return the text to print.
pub async fn run(app: &App, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Save(person) => save(app, person).await,
        Command::Seed => {
            let cents = app.random.gen_range(100, 99_999);
            let person = Person::new("Jake Blues", "0123456789", "AUD", f64::from(cents) / 100.0);
            save(app, person).await
        }
        Command::Load(id) => {
            let person = app.persons.load(id).await?;
            Ok(format_person(&person))
        }
        Command::List => {
            let persons = app.persons.load_all().await?;
            if persons.is_empty() {
                return Ok("No persons stored".to_string());
            }
            Ok(persons
                .iter()
                .map(format_person)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::WriteConfig { path, config } => {
            app.config_files.save_config(&path, &config)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

async fn save(app: &App, person: Person) -> anyhow::Result<String> {
    let id = app.persons.save(&person).await?;
    let saved_at = app.clock.now();
    tracing::info!(id = %id, saved_at = %saved_at, "Person saved");
    Ok(format!("Saved person {id} at {}", saved_at.to_rfc3339()))
}

fn format_person(person: &Person) -> String {
    let id = person
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{id}\t{}\t{}\t{}\t{:.2}",
        person.full_name, person.phone, person.currency, person.price
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::{
        MockFileWriterPort, MockPersonRepo, PersonRepo, StoreError,
    };
    use chrono::{TimeZone, Utc};
    use mockall::predicate::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn test_app(persons: MockPersonRepo, writer: MockFileWriterPort) -> App {
        let persons: Arc<dyn PersonRepo> = Arc::new(persons);
        App::new(
            persons,
            Arc::new(writer),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2019, 6, 17, 0, 0, 0).unwrap())),
            Arc::new(FixedRandom(12_345)),
        )
    }

    #[test]
    fn parses_save() {
        let cmd = Command::parse(args(&["save", "Jake Blues", "0123456789", "AUD", "123.45"]))
            .expect("parse");
        assert_eq!(
            cmd,
            Command::Save(Person::new("Jake Blues", "0123456789", "AUD", 123.45))
        );
    }

    #[test]
    fn parses_load_and_rejects_bad_ids() {
        assert_eq!(
            Command::parse(args(&["load", "2"])).expect("parse"),
            Command::Load(PersonId::new(2).unwrap())
        );
        assert!(Command::parse(args(&["load", "0"])).is_err());
        assert!(Command::parse(args(&["load", "two"])).is_err());
    }

    #[test]
    fn parses_write_config() {
        let cmd = Command::parse(args(&["write-config", "config.json", "127.0.0.1", "8080"]))
            .expect("parse");
        assert_eq!(
            cmd,
            Command::WriteConfig {
                path: PathBuf::from("config.json"),
                config: ServerConfig::new("127.0.0.1", "8080"),
            }
        );
    }

    #[test]
    fn rejects_unknown_missing_and_extra_arguments() {
        assert!(Command::parse(args(&[])).is_err());
        assert!(Command::parse(args(&["delete", "1"])).is_err());
        assert!(Command::parse(args(&["save", "Jake"])).is_err());
        assert!(Command::parse(args(&["list", "now"])).is_err());
        assert!(Command::parse(args(&["save", "a", "b", "c", "cheap"])).is_err());
    }

    #[tokio::test]
    async fn save_reports_id_and_clock_time() {
        let mut persons = MockPersonRepo::new();
        persons
            .expect_save()
            .with(eq(Person::new("Jake Blues", "0123456789", "AUD", 123.45)))
            .times(1)
            .returning(|_| Ok(PersonId::new(2).unwrap()));

        let app = test_app(persons, MockFileWriterPort::new());
        let out = run(
            &app,
            Command::Save(Person::new("Jake Blues", "0123456789", "AUD", 123.45)),
        )
        .await
        .expect("run");

        assert_eq!(out, "Saved person 2 at 2019-06-17T00:00:00+00:00");
    }

    #[tokio::test]
    async fn seed_prices_from_the_random_source() {
        let mut persons = MockPersonRepo::new();
        persons
            .expect_save()
            .withf(|p| p.full_name == "Jake Blues" && p.price == 123.45)
            .times(1)
            .returning(|_| Ok(PersonId::new(1).unwrap()));

        let app = test_app(persons, MockFileWriterPort::new());
        let out = run(&app, Command::Seed).await.expect("run");

        assert!(out.starts_with("Saved person 1"));
    }

    #[tokio::test]
    async fn load_propagates_not_found() {
        let mut persons = MockPersonRepo::new();
        persons
            .expect_load()
            .returning(|id| Err(StoreError::not_found("Person", id)));

        let app = test_app(persons, MockFileWriterPort::new());
        let err = run(&app, Command::Load(PersonId::new(5).unwrap()))
            .await
            .expect_err("missing");

        let store_err = err.downcast_ref::<StoreError>().expect("store error");
        assert!(store_err.is_not_found());
    }

    #[tokio::test]
    async fn list_formats_each_row() {
        let mut persons = MockPersonRepo::new();
        persons.expect_load_all().returning(|| {
            Ok(vec![Person::new("John", "0123456789", "AUD", 12.34)
                .with_id(PersonId::new(1).unwrap())])
        });

        let app = test_app(persons, MockFileWriterPort::new());
        let out = run(&app, Command::List).await.expect("run");

        assert_eq!(out, "1\tJohn\t0123456789\tAUD\t12.34");
    }

    #[tokio::test]
    async fn list_of_empty_store_says_so() {
        let mut persons = MockPersonRepo::new();
        persons.expect_load_all().returning(|| Ok(Vec::new()));

        let app = test_app(persons, MockFileWriterPort::new());
        let out = run(&app, Command::List).await.expect("run");

        assert_eq!(out, "No persons stored");
    }

    #[tokio::test]
    async fn write_config_goes_through_the_writer() {
        let mut writer = MockFileWriterPort::new();
        writer
            .expect_write_file()
            .withf(|path, _| path == std::path::Path::new("config.json"))
            .times(1)
            .returning(|_, _| Ok(()));

        let app = test_app(MockPersonRepo::new(), writer);
        let out = run(
            &app,
            Command::WriteConfig {
                path: PathBuf::from("config.json"),
                config: ServerConfig::new("127.0.0.1", "8080"),
            },
        )
        .await
        .expect("run");

        assert_eq!(out, "Wrote config.json");
    }
}
