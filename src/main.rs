use anyhow::{Context, Result};
use clap::Parser;
use listing_scout::config::{BrowseArgs, Cli, Command, SavedCommand};
use listing_scout::format::{
    format_address, format_bed_bath, format_price, format_property_type, format_square_feet,
};
use listing_scout::saved::{SavedListings, Toggled};
use listing_scout::sources::{JsonFileSource, ListingSource, SampleSource};
use listing_scout::{BrowseSession, Listing};
use std::num::NonZeroUsize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn ListingSource> = match &cli.data {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            info!("📋 Using built-in sample listings");
            Box::new(SampleSource::new())
        }
    };
    info!("🏠 Listing Scout - {}", source.source_name());

    match cli.command {
        Command::Browse(args) => browse(source.as_ref(), cli.page_size, &args).await,
        Command::Show { id } => {
            let listing = source
                .get_by_id(id)
                .await
                .with_context(|| format!("Failed to load listing {}", id))?;
            print_listing(&listing);
            Ok(())
        }
        Command::Saved(command) => saved(source.as_ref(), cli.saved, command).await,
    }
}

async fn browse(source: &dyn ListingSource, page_size: NonZeroUsize, args: &BrowseArgs) -> Result<()> {
    let listings = source.get_all().await.context("Failed to load listings")?;

    let mut session = BrowseSession::new(page_size);
    session.set_listings(listings);
    for update in args.filter_updates() {
        session.update_filter(update);
    }
    session.go_to_page(args.page);

    let page = session.current_page();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    info!(
        "✅ {} of {} listings match ({} active filters)",
        session.filtered().len(),
        session.listings().len(),
        session.active_filter_count()
    );

    let offset = (page.current_page - 1) * page_size.get();
    for (i, listing) in page.items.iter().enumerate() {
        println!("{}. {}", offset + i + 1, listing.title);
        print_summary(listing);
        println!();
    }

    if page.total_pages > 1 {
        let pages: Vec<String> = session
            .visible_pages()
            .iter()
            .map(|link| match link {
                listing_scout::PageLink::Page(n) if *n == page.current_page => format!("[{}]", n),
                other => other.to_string(),
            })
            .collect();
        println!(
            "{}  {}  {}",
            if page.has_previous_page { "< prev" } else { "" },
            pages.join(" "),
            if page.has_next_page { "next >" } else { "" }
        );
    }

    Ok(())
}

async fn saved(
    source: &dyn ListingSource,
    path: std::path::PathBuf,
    command: SavedCommand,
) -> Result<()> {
    let mut store = SavedListings::load(&path)
        .await
        .with_context(|| format!("Failed to open saved listings at {}", path.display()))?;

    match command {
        SavedCommand::List => {
            let listings = source.get_all().await.context("Failed to load listings")?;
            let entries = store.list(&listings);
            info!("💾 {} saved listings", entries.len());
            for entry in entries {
                println!(
                    "{} (saved {})",
                    entry.listing.title,
                    entry.saved.saved_at.format("%Y-%m-%d %H:%M")
                );
                print_summary(entry.listing);
                if !entry.saved.notes.is_empty() {
                    println!("   Notes: {}", entry.saved.notes);
                }
                println!();
            }
        }
        SavedCommand::Add { id, notes } => {
            let listing = source.get_by_id(id).await?;
            store.save(id, &notes).await?;
            println!("Saved {}", listing.title);
        }
        SavedCommand::Remove { id } => {
            store.remove(id).await?;
            println!("Removed listing {}", id);
        }
        SavedCommand::Toggle { id } => match store.toggle(id).await? {
            Toggled::Saved => println!("Saved listing {}", id),
            Toggled::Removed => println!("Removed listing {}", id),
        },
        SavedCommand::Note { id, notes } => {
            store.update_notes(id, &notes).await?;
            println!("Updated notes for listing {}", id);
        }
    }

    Ok(())
}

fn print_summary(listing: &Listing) {
    println!(
        "   {} · {}",
        format_price(listing.price),
        format_property_type(&listing.property_type)
    );
    println!(
        "   {}, {}",
        format_bed_bath(listing.bedrooms, listing.bathrooms),
        format_square_feet(listing.square_feet)
    );
    println!(
        "   {}",
        format_address(&listing.address, &listing.city, &listing.state)
    );
    println!("   ID: {}", listing.id);
}

fn print_listing(listing: &Listing) {
    println!("{}", listing.title);
    print_summary(listing);
    if let Some(status) = &listing.status {
        println!("   Status: {}", status);
    }
    if let Some(date) = listing.listing_date {
        println!("   Listed: {}", date.format("%Y-%m-%d"));
    }
    if let Some(year) = listing.year_built {
        println!("   Built: {}", year);
    }
    if let Some(district) = &listing.school_district {
        println!("   School district: {}", district);
    }
    if let Some(neighborhood) = &listing.neighborhood {
        println!("   Neighborhood: {}", neighborhood);
    }
    if let Some(minutes) = listing.commute_time {
        println!("   Commute: {} min", minutes);
    }
    println!("   Features: {}", listing.features.join(", "));
    println!();
    println!("{}", listing.description);
}
