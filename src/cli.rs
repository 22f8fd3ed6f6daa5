// src/cli.rs
//
// Terminal front end over the same core the GUI uses. `open` takes a
// location exactly as the GUI address bar shows it.

use std::io::{ self, Write };

use clap::{ Parser, Subcommand };
use color_eyre::eyre::Result;

use crate::{
    catalog::{ Catalog, Cricketer },
    config::options::Settings,
    filter::{ normalize_role, FilterState, ResultView },
    router::Route,
    sync::{ decode, encode },
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Browse the cricketer catalog from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter by free text, country and role
    Search {
        /// Matches name, country or role, case-insensitive
        #[arg(short, long, default_value = "")]
        q: String,
        /// Exact country name
        #[arg(short, long, default_value = "")]
        country: String,
        /// Role tag; plural shortcuts are normalized like a location
        #[arg(short, long, default_value = "")]
        role: String,
    },
    /// Show one profile
    Show { id: String },
    /// Resolve a location such as "/search?role=Bowler" or "/player/3"
    Open { location: String },
    /// List distinct countries
    Countries,
    /// List canonical roles
    Roles,
    /// Catalog totals
    Stats,
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let catalog = Catalog::load(&settings)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Search { q, country, role } => {
            let state = FilterState { query: q, country, role: normalize_role(&role) };
            print_results(&mut out, &catalog, &state)?;
        }
        Command::Show { id } => {
            let player = catalog.lookup(&id)?;
            print_profile(&mut out, player)?;
        }
        Command::Open { location } => {
            let route = Route::parse(&location);
            match &route {
                Route::Home => print_home(&mut out, &catalog, &settings)?,
                Route::Search(params) => {
                    let state = decode(params);
                    let canonical = Route::Search(encode(&state));
                    writeln!(out, "{}", canonical.to_location())?;
                    print_results(&mut out, &catalog, &state)?;
                }
                Route::Profile(id) => match catalog.lookup(id) {
                    Ok(player) => print_profile(&mut out, player)?,
                    Err(e) => writeln!(out, "Player not found ({e})")?,
                },
            }
        }
        Command::Countries => {
            for c in catalog.countries() {
                writeln!(out, "{c}")?;
            }
        }
        Command::Roles => {
            for r in catalog.roles() {
                writeln!(out, "{r}")?;
            }
        }
        Command::Stats => {
            let s = catalog.quick_stats();
            writeln!(out, "Players:         {}", s.total_players)?;
            writeln!(out, "Countries:       {}", s.countries)?;
            writeln!(out, "Total centuries: {}", s.total_centuries)?;
            writeln!(out, "Total wickets:   {}", s.total_wickets)?;
        }
    }
    Ok(())
}

fn print_row(out: &mut impl Write, c: &Cricketer) -> io::Result<()> {
    writeln!(out, "{:>4}  {:<24} {:<14} {}", c.id, c.name, c.country, c.role)
}

fn print_results(out: &mut impl Write, catalog: &Catalog, state: &FilterState) -> io::Result<()> {
    let view = ResultView::new(catalog, state);
    if view.is_empty() {
        writeln!(out, "No players found")?;
    }
    for c in view.iter() {
        print_row(out, c)?;
    }
    writeln!(out, "Showing {} of {} cricketers", view.len(), view.total())
}

fn print_profile(out: &mut impl Write, p: &Cricketer) -> io::Result<()> {
    let s = &p.stats;
    writeln!(out, "{} ({}, {})", p.name, p.country, p.role)?;
    writeln!(out, "{}", p.bio)?;
    writeln!(out)?;
    writeln!(out, "Matches {}  Runs {}  Wickets {}", s.matches, s.runs, s.wickets)?;
    writeln!(out, "100s {}  50s {}  Avg {:.2}  SR {:.2}  HS {}  Debut {}",
        s.centuries, s.half_centuries, s.average, s.strike_rate, s.highest_score, s.debut)?;
    if !p.highlights.is_empty() {
        writeln!(out)?;
        for h in &p.highlights {
            writeln!(out, "  * {h}")?;
        }
    }
    if !p.recent_matches.is_empty() {
        writeln!(out)?;
        for m in &p.recent_matches {
            writeln!(out, "  {:<28} {:<5} {:<8} {:<5} {}", m.label, m.format, m.score, m.result, m.year)?;
        }
    }
    Ok(())
}

fn print_home(out: &mut impl Write, catalog: &Catalog, settings: &Settings) -> io::Result<()> {
    writeln!(out, "Featured:")?;
    for c in catalog.featured(settings.featured_count) {
        print_row(out, c)?;
    }
    Ok(())
}
