use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{PlaceFilter, hours_options, price_options};
use crate::core::places::PlaceLogic;
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::place::Place;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, ansi_for_marker, colorize_optional};
use crate::utils::formatting::{bold, coords, italic, rating_label, truncate_width};
use crate::utils::table::Table;

const NAME_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::List {
        hours,
        price,
        details,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let places = PlaceLogic::list(&pool)?;

        header("Info Nongkrong Mahasiswa Tembalang");

        if let Some(user) = session.username() {
            info(format!("Logged in as {}", user));
        }

        print_filter_line("Jam Buka", hours, &hours_options(&places));
        print_filter_line("Harga", price, &price_options(&places));
        println!();

        let filter = PlaceFilter::new(hours.clone(), price.clone());
        let filtered = filter.apply(&places);

        if filtered.is_empty() {
            warning("No matching places!");
            return Ok(());
        }

        println!("{}", render_table(&filtered, session.is_admin()));

        if *details {
            for p in &filtered {
                print_details(p, session.is_admin());
            }
        }
    }
    Ok(())
}

/// "Jam Buka: 24 Jam, Nggak 24 Jam" with the available options when
/// nothing is selected.
fn print_filter_line(label: &str, selected: &[String], available: &[String]) {
    let shown = if selected.is_empty() {
        available
    } else {
        selected
    };
    println!("🔍 {}: {}", label, colorize_optional(&shown.join(", ")));
}

fn render_table(places: &[&Place], show_creator: bool) -> String {
    let mut headers = vec!["ID", "Nama", "Jam Buka", "Harga", "Rating", "Marker"];
    if show_creator {
        headers.push("Creator");
    }

    let mut table = Table::new(headers);
    for p in places {
        let mut row = vec![
            p.id.to_string(),
            truncate_width(&p.name, NAME_WIDTH),
            p.hours.clone(),
            p.price.clone(),
            format!("{:.1}", p.rating),
            p.marker_color().to_string(),
        ];
        if show_creator {
            row.push(p.creator.clone());
        }
        table.add_row(row);
    }

    table.render()
}

fn print_details(p: &Place, show_creator: bool) {
    let marker = ansi_for_marker(p.marker_color());

    println!(
        "{}● {}{} ({})",
        marker,
        bold(&p.name),
        RESET,
        p.price
    );
    println!("   Jam: {} | {}", p.hours, rating_label(p.rating));
    println!("   Foto: {}", colorize_optional(&p.photo));
    if !p.comment.is_empty() {
        println!("   {}", italic(&p.comment));
    }
    println!("   Koordinat: {}", coords(p.latitude, p.longitude));
    println!("   📍 {}", p.maps_url());
    if show_creator {
        println!("   🧑‍💻 Ditambahkan oleh: {}", colorize_optional(&p.creator));
    }
    println!();
}
