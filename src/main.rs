use anyhow::Context;
use clap::Parser;
use realty_hub::config::cli::{AgreementArgs, BrokerCommand, Command, LogFormat};
use realty_hub::core::Clipboard;
use realty_hub::utils::logger;
use realty_hub::{
    CliConfig, LocalStorage, NewContact, RealtyError, RealtyHub, Settings, SystemClipboard,
};

type Hub = RealtyHub<LocalStorage, LazyClipboard>;

/// Connects to the system clipboard on first use, so commands that never
/// copy work on machines without a display. The process exits right after
/// copying, so the text is held until another program takes the clipboard.
#[derive(Default)]
struct LazyClipboard(Option<SystemClipboard>);

impl Clipboard for LazyClipboard {
    fn set_text(&mut self, text: &str) -> realty_hub::Result<()> {
        let clipboard = match self.0.take() {
            Some(clipboard) => clipboard,
            None => SystemClipboard::new()?.hold_until_replaced(true),
        };
        self.0.insert(clipboard).set_text(text)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli) {
        match e.downcast_ref::<RealtyError>() {
            Some(err) => {
                tracing::error!(
                    "❌ Command failed: {} (Category: {:?})",
                    err,
                    err.category()
                );
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => return Err(e),
        }
    }

    Ok(())
}

fn run(cli: CliConfig) -> anyhow::Result<()> {
    let settings = Settings::resolve(&cli.overrides())?;
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(settings.data_dir.clone());
    let mut hub: Hub = RealtyHub::new(
        storage,
        settings.contacts_file.as_str(),
        LazyClipboard::default(),
        settings.currency_symbol.as_str(),
    );

    match cli.command {
        Command::Calc { area, price } => {
            let result = hub.calculate(&area, &price)?;
            println!("{}", result.display(hub.currency_symbol()));
        }
        Command::Tax {
            annual_value,
            tax_rate,
            rebate,
        } => {
            let result = hub.calculate_property_tax(&annual_value, &tax_rate, &rebate)?;
            println!("{}", result.display(hub.currency_symbol()));
        }
        Command::Broker(command) => run_broker(&mut hub, command)?,
        Command::Agreement(args) => run_agreement(&mut hub, &args)?,
    }

    Ok(())
}

fn run_broker(hub: &mut Hub, command: BrokerCommand) -> anyhow::Result<()> {
    match command {
        BrokerCommand::Add {
            name,
            phone,
            locality,
        } => {
            let added = hub.add_contact(NewContact::new(name, phone, locality))?;
            println!("✅ Broker '{}' saved successfully.", added.name);
        }
        BrokerCommand::List => print_contacts(hub)?,
        BrokerCommand::Delete { position } => {
            let index = position.checked_sub(1).ok_or_else(|| {
                RealtyError::validation("position", "Positions start at 1; see `broker list`")
            })?;
            let removed = hub.delete_contact(index)?;
            println!("🗑️ Broker '{}' deleted.", removed.name);
        }
        BrokerCommand::Import { path } => {
            let summary = hub.import_legacy_file(&path)?;
            println!(
                "✅ Imported {} broker(s) from {} ({} skipped).",
                summary.imported,
                path.display(),
                summary.skipped
            );
        }
    }
    Ok(())
}

fn print_contacts(hub: &mut Hub) -> anyhow::Result<()> {
    let contacts = hub.list_contacts()?;
    if contacts.is_empty() {
        println!("No brokers saved yet.");
        return Ok(());
    }

    for (idx, contact) in contacts.iter().enumerate() {
        if contact.locality.is_empty() {
            println!("[{}] {} - {}", idx + 1, contact.name, contact.phone);
        } else {
            println!(
                "[{}] {} - {} ({})",
                idx + 1,
                contact.name,
                contact.phone,
                contact.locality
            );
        }
    }
    Ok(())
}

fn run_agreement(hub: &mut Hub, args: &AgreementArgs) -> anyhow::Result<()> {
    let text = hub.generate_agreement(&args.fields())?.to_string();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write agreement to {}", path.display()))?;
            println!("📁 Agreement saved to: {}", path.display());
        }
        None => println!("{}", text),
    }

    if args.copy {
        hub.copy_last_agreement()?;
        eprintln!("📋 Agreement text copied to clipboard.");
    }

    Ok(())
}
