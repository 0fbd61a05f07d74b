//! Command-line browser for the pet clinic records.
//!
//! Runs against the in-memory store, preloaded with the demo dataset unless
//! `SEED_DATA=false`.
//!
//! # Usage
//!
//! ```bash
//! # List owners, optionally filtered by last name prefix
//! cargo run --bin clinic -- owners --last-name Dav
//!
//! # Show an owner with their pets
//! cargo run --bin clinic -- owner 6
//!
//! # Show a pet as JSON
//! cargo run --bin clinic -- --json pet 7
//!
//! # Visit history of several pets
//! cargo run --bin clinic -- visits 7 8
//!
//! # Check a telephone against the configured policy
//! cargo run --bin clinic -- check-phone 6085551023
//! ```
//!
//! # Environment Variables
//!
//! See [`petclinic_model::config`] for the full list.

use petclinic_model::application::services::{
    OwnerService, PetService, VetService, VisitService,
};
use petclinic_model::config::{self, Config};
use petclinic_model::domain::entities::{Owner, Vet, Visit};
use petclinic_model::infrastructure::memory::{
    InMemoryOwnerRepository, InMemoryPetTypeRepository, InMemoryStore, InMemoryVetRepository,
    InMemoryVisitRepository,
};
use petclinic_model::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;

/// Browse owners, pets, vets and visits.
#[derive(Parser)]
#[command(name = "clinic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List owners
    Owners {
        /// Only owners whose last name starts with this prefix
        #[arg(short, long)]
        last_name: Option<String>,
    },

    /// Show one owner with their pets
    Owner {
        id: i32,
    },

    /// Show one pet
    Pet {
        id: i32,
    },

    /// List pet types
    PetTypes,

    /// List vets and their specialties
    Vets,

    /// Show the visit history of one or more pets
    Visits {
        #[arg(required = true)]
        pet_ids: Vec<i32>,
    },

    /// Check a telephone number against the configured policy
    CheckPhone {
        number: String,
    },
}

/// Services wired over one in-memory store.
struct Clinic {
    owners: OwnerService<InMemoryOwnerRepository>,
    pets: PetService<InMemoryOwnerRepository, InMemoryPetTypeRepository>,
    vets: VetService<InMemoryVetRepository>,
    visits: VisitService<InMemoryVisitRepository>,
}

impl Clinic {
    fn new(store: InMemoryStore, config: &Config) -> Self {
        Self {
            owners: OwnerService::new(store.owners.clone(), config.telephone_policy()),
            pets: PetService::new(store.owners, store.pet_types),
            vets: VetService::new(store.vets),
            visits: VisitService::new(store.visits),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config).context("Failed to initialize logging")?;
    config.print_summary();

    let store = if config.seed_data {
        InMemoryStore::seeded()
            .await
            .context("Failed to load demo data")?
    } else {
        InMemoryStore::new()
    };
    let clinic = Clinic::new(store, &config);

    match cli.command {
        Commands::Owners { last_name } => list_owners(&clinic, last_name, cli.json).await?,
        Commands::Owner { id } => show_owner(&clinic, id, cli.json).await?,
        Commands::Pet { id } => show_pet(&clinic, id, cli.json).await?,
        Commands::PetTypes => list_pet_types(&clinic, cli.json).await?,
        Commands::Vets => list_vets(&clinic, cli.json).await?,
        Commands::Visits { pet_ids } => list_visits(&clinic, &pet_ids, cli.json).await?,
        Commands::CheckPhone { number } => check_phone(&config, &number, cli.json)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{text}");
    Ok(())
}

/// Lists owners with their pet names.
///
/// # Output Format
///
/// ```text
/// Owners
///
///   ID  Name                     City            Telephone    Pets
///   -------------------------------------------------------------------
///   1   George Franklin          Madison         6085551023   Leo
/// ```
async fn list_owners(clinic: &Clinic, last_name: Option<String>, json: bool) -> Result<()> {
    let owners = match last_name {
        Some(prefix) => clinic.owners.find_by_last_name(&prefix).await,
        None => clinic.owners.find_all().await,
    }
    .context("Failed to list owners")?;

    if json {
        return print_json(&owners);
    }

    println!("{}", "Owners".bright_blue().bold());
    println!();

    if owners.is_empty() {
        println!("{}", "  No owners found".yellow());
        return Ok(());
    }

    println!(
        "  {:<3} {:<24} {:<15} {:<12} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "City".bright_white().bold(),
        "Telephone".bright_white().bold(),
        "Pets".bright_white().bold()
    );
    println!("  {}", "-".repeat(75).bright_black());

    for owner in &owners {
        println!(
            "  {:<3} {:<24} {:<15} {:<12} {}",
            id_text(owner.id()).bright_black(),
            full_name(owner).cyan(),
            owner.city(),
            owner.telephone(),
            pet_names(owner)
        );
    }

    println!();
    println!(
        "  Total: {}",
        owners.len().to_string().bright_white().bold()
    );

    Ok(())
}

async fn show_owner(clinic: &Clinic, id: i32, json: bool) -> Result<()> {
    let owner = clinic
        .owners
        .find_owner(id)
        .await
        .with_context(|| format!("Failed to load owner {id}"))?;

    if json {
        return print_json(&owner);
    }

    println!("{}", full_name(&owner).bright_blue().bold());
    println!("  Address:   {}", owner.address());
    println!("  City:      {}", owner.city());
    println!("  Telephone: {}", owner.telephone());
    println!();

    let pets = owner.pets();
    if pets.is_empty() {
        println!("{}", "  No pets".yellow());
        return Ok(());
    }

    let pet_ids: Vec<i32> = pets.iter().filter_map(|p| p.id).collect();
    let history = clinic
        .visits
        .visits_for_pets(&pet_ids)
        .await
        .context("Failed to load visits")?;

    for pet in pets {
        let kind = pet
            .pet_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("-");
        let born = pet
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} {} ({}, born {})",
            id_text(pet.id).bright_black(),
            pet.name.cyan(),
            kind,
            born
        );

        for visit in history.items.iter().filter(|v| Some(v.pet_id) == pet.id) {
            println!("      {}", visit_line(visit));
        }
    }

    Ok(())
}

async fn show_pet(clinic: &Clinic, id: i32, json: bool) -> Result<()> {
    let pet = clinic
        .pets
        .find_pet(id)
        .await
        .with_context(|| format!("Failed to load pet {id}"))?;

    if json {
        return print_json(&pet);
    }

    println!("{}", pet.name.bright_blue().bold());
    println!("  ID:    {}", id_text(pet.id));
    println!(
        "  Type:  {}",
        pet.pet_type.as_ref().map(|t| t.name.as_str()).unwrap_or("-")
    );
    println!(
        "  Born:  {}",
        pet.birth_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Owner: {}", pet.owner.cyan());

    Ok(())
}

async fn list_pet_types(clinic: &Clinic, json: bool) -> Result<()> {
    let types = clinic
        .pets
        .pet_types()
        .await
        .context("Failed to list pet types")?;

    if json {
        return print_json(&types);
    }

    println!("{}", "Pet types".bright_blue().bold());
    println!();
    for pet_type in &types {
        println!(
            "  {:<3} {}",
            id_text(pet_type.id).bright_black(),
            pet_type.name.cyan()
        );
    }

    Ok(())
}

async fn list_vets(clinic: &Clinic, json: bool) -> Result<()> {
    let vets = clinic
        .vets
        .all_vets()
        .await
        .context("Failed to list vets")?;

    if json {
        return print_json(&vets);
    }

    println!("{}", "Veterinarians".bright_blue().bold());
    println!();
    for vet in &vets {
        println!(
            "  {:<3} {:<24} {}",
            id_text(vet.id).bright_black(),
            format!("{} {}", vet.first_name, vet.last_name).cyan(),
            specialty_names(vet)
        );
    }

    Ok(())
}

async fn list_visits(clinic: &Clinic, pet_ids: &[i32], json: bool) -> Result<()> {
    let visits = clinic
        .visits
        .visits_for_pets(pet_ids)
        .await
        .context("Failed to list visits")?;

    if json {
        return print_json(&visits);
    }

    println!("{}", "Visits".bright_blue().bold());
    println!();

    if visits.items.is_empty() {
        println!("{}", "  No visits found".yellow());
        return Ok(());
    }

    for visit in &visits.items {
        println!(
            "  pet {:<4} {}",
            visit.pet_id.to_string().bright_black(),
            visit_line(visit)
        );
    }

    Ok(())
}

fn check_phone(config: &Config, number: &str, json: bool) -> Result<()> {
    let result = config.telephone_policy().check(number);

    if json {
        print_json(&serde_json::json!({
            "telephone": number,
            "valid": result.is_ok(),
        }))?;
    } else if result.is_ok() {
        println!("{} {}", "valid".green().bold(), number);
    } else {
        println!("{} {}", "invalid".red().bold(), number);
    }

    result.context("Telephone rejected")
}

fn id_text(id: Option<i32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

fn full_name(owner: &Owner) -> String {
    format!("{} {}", owner.first_name(), owner.last_name())
}

fn pet_names(owner: &Owner) -> String {
    owner
        .pets()
        .into_iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn specialty_names(vet: &Vet) -> String {
    if vet.nr_of_specialties() == 0 {
        return "none".bright_black().to_string();
    }
    vet.specialties()
        .into_iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn visit_line(visit: &Visit) -> String {
    let date = visit
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {}",
        date.bright_black(),
        visit.description.as_deref().unwrap_or("")
    )
}
