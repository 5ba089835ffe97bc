use clap::Parser;
use townhall::app::reports::{to_json, BuildingTaxLine, MailboxReport, TaxReport};
use townhall::config::{Commands, FrankCommand, MailArgs};
use townhall::utils::{logger, validation::Validate};
use townhall::{
    Appartment, Cadastre, CliConfig, DeliveryMode, Format, Frankable, Mail, MailKind, Mailbox,
    TaxesCalculator, TownConfig, TownError,
};

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let verbose = cli.verbose || config.verbose();
    if cli.log_json || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);
    let calculator = config.taxes_calculator();
    tracing::info!(
        "Tax rates: {} per m² living, {} per m² garden",
        calculator.living_area_rate,
        calculator.garden_area_rate
    );

    if let Err(e) = run(&cli, &calculator) {
        tracing::error!("❌ Command failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = if e.is_config_error() { 1 } else { 2 };
        std::process::exit(exit_code);
    }
}

fn load_config(cli: &CliConfig) -> townhall::Result<TownConfig> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => TownConfig::from_file(path)?,
        None => TownConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, calculator: &TaxesCalculator) -> Result<(), TownError> {
    match &cli.command {
        Commands::House {
            living_area,
            garden_area,
        } => {
            let mut cadastre = Cadastre::new();
            let owner = cadastre.add_person("Owner");
            let house = cadastre.add_house(owner, *living_area, *garden_area)?;
            print_building(cli, calculator, &cadastre, house)
        }
        Commands::Appartments { areas } => {
            let appartments: Vec<Appartment> = areas.iter().copied().map(Appartment::new).collect();
            let mut cadastre = Cadastre::new();
            let owner = cadastre.add_person("Owner");
            let building = cadastre.add_appartment_building(owner, &appartments)?;
            print_building(cli, calculator, &cadastre, building)
        }
        Commands::Frank(command) => {
            let mail = build_mail(command);
            if cli.json {
                let summary = serde_json::json!({
                    "line": mail.to_string(),
                    "valid": mail.is_valid(),
                    "frank": mail.frank(),
                });
                println!("{}", to_json(&summary)?);
            } else {
                println!("{}", mail);
                println!("Franking: {:.2}", mail.frank());
            }
            Ok(())
        }
        Commands::Demo => run_demo(cli, calculator),
    }
}

fn print_building(
    cli: &CliConfig,
    calculator: &TaxesCalculator,
    cadastre: &Cadastre,
    building: townhall::BuildingId,
) -> Result<(), TownError> {
    let line = BuildingTaxLine::new(calculator, cadastre.building(building)?);
    if cli.json {
        println!("{}", to_json(&line)?);
    } else {
        println!(
            "{} ({} m² living, {} m² garden): {:.2}",
            line.kind, line.living_area, line.garden_area, line.taxes
        );
    }
    Ok(())
}

fn build_mail(command: &FrankCommand) -> Mail {
    let (args, kind): (&MailArgs, MailKind) = match command {
        FrankCommand::Letter { mail, format } => (mail, MailKind::Letter { format: *format }),
        FrankCommand::Parcel { mail, volume } => (mail, MailKind::Parcel { volume: *volume }),
        FrankCommand::Advertisement { mail } => (mail, MailKind::Advertisement),
    };
    Mail::new(args.weight, args.mode, args.address.clone(), kind)
}

fn run_demo(cli: &CliConfig, calculator: &TaxesCalculator) -> Result<(), TownError> {
    let mut cadastre = Cadastre::new();
    let alice = cadastre.add_person("Alice");
    let bob = cadastre.add_person("Bob");
    cadastre.add_house(alice, 50, 10)?;
    let app_building =
        cadastre.add_appartment_building(alice, &[Appartment::new(30), Appartment::new(60)])?;

    tracing::info!("🏠 Bob buys the appartment building from Alice");
    cadastre.transfer(app_building, bob)?;

    let mut mailbox = Mailbox::new();
    mailbox.add_mail(Mail::letter(180, DeliveryMode::Normal, "dest", Format::A5));
    mailbox.add_mail(Mail::letter(240, DeliveryMode::Express, "", Format::A4));
    mailbox.add_mail(Mail::parcel(1800, DeliveryMode::Normal, "dest", 2));
    mailbox.add_mail(Mail::parcel(15000, DeliveryMode::Express, "dest", 200));
    mailbox.add_mail(Mail::advertisement(200, DeliveryMode::Normal, "dest"));

    let tax_reports = [
        TaxReport::for_person(&cadastre, calculator, alice)?,
        TaxReport::for_person(&cadastre, calculator, bob)?,
    ];
    let mailbox_report = MailboxReport::from_mailbox(&mailbox);

    if cli.json {
        let demo = serde_json::json!({
            "taxes": tax_reports,
            "mailbox": mailbox_report,
        });
        println!("{}", to_json(&demo)?);
    } else {
        for report in &tax_reports {
            print!("{}", report);
        }
        println!();
        print!("{}", mailbox_report);
    }
    Ok(())
}
