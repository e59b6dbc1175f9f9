use clap::{Parser, Subcommand};
use fleetview_core::{
    AcquisitionsClient, AcquisitionsScreen, ClientConfig, DEFAULT_BASE_URL,
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_SIZE, PageModel, PageWindow, ScreenConfig, ScreenView,
    column_names, compute_window,
};
use time::format_description::well_known::Rfc3339;

const MAX_CELL_WIDTH: usize = 24;

#[derive(Parser)]
#[command(name = "fleetview-cli")]
#[command(about = "Browse vehicle acquisitions page by page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch acquisitions and print one page
    List {
        /// Base URL of the acquisitions API
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Page to show (1-indexed, clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Records per page
        #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
        per_page: usize,
        /// Numbered page buttons to show at once
        #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window: usize,
    },
    /// Print the page window for a given position
    Window {
        /// Current page (1-indexed)
        #[arg(short, long)]
        current: usize,
        /// Total number of pages
        #[arg(short, long)]
        total: usize,
        /// Numbered page buttons to show at once
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            base_url,
            page,
            per_page,
            window,
        } => {
            let client = AcquisitionsClient::new(&ClientConfig::with_base_url(base_url))?;
            let mut screen = AcquisitionsScreen::new(ScreenConfig {
                items_per_page: per_page.max(1),
                window_size: window,
            });

            println!("Fetching {}...", client.endpoint());
            screen.load(&client).await;
            screen.set_page(page);

            match screen.view() {
                ScreenView::Loading => {
                    eprintln!("No data received");
                    std::process::exit(1);
                }
                ScreenView::Failed(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
                ScreenView::Ready(model) => print_page(&model),
            }
        }
        Commands::Window {
            current,
            total,
            size,
        } => {
            let window = compute_window(current, total, size);
            log::debug!("window for page {} of {}: {:?}", current, total, window);
            if window.is_empty() {
                println!("(no pages)");
            } else {
                println!("{}", pagination_bar(&window, current.clamp(1, total), total));
            }
        }
    }

    Ok(())
}

fn print_page(model: &PageModel<'_>) {
    let fetched_at = model
        .fetched_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| model.fetched_at.to_string());
    println!(
        "Vehicle acquisitions: {} records (fetched {})",
        model.total_items, fetched_at
    );

    if model.rows.is_empty() {
        println!("  No records.");
        return;
    }

    let columns = column_names(model.rows);
    if columns.is_empty() {
        for (offset, row) in model.rows.iter().enumerate() {
            let index = model.first_row_index + offset;
            println!("  {:>4}  {}", index + 1, row.as_value());
        }
    } else {
        let header: Vec<String> = columns.iter().map(|c| cell(c)).collect();
        println!("  {:>4}  {}", "#", header.join(" | "));
        for (offset, row) in model.rows.iter().enumerate() {
            let index = model.first_row_index + offset;
            let cells: Vec<String> = columns.iter().map(|c| cell(&row.field_text(c))).collect();
            println!("  {:>4}  {}", index + 1, cells.join(" | "));
        }
    }

    if model.show_controls {
        println!();
        println!(
            "{}",
            pagination_bar(&model.window, model.current_page, model.total_pages)
        );
        println!("Page {} of {}", model.current_page, model.total_pages);
    }
}

fn cell(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_CELL_WIDTH).collect();
    format!("{:<width$}", truncated, width = MAX_CELL_WIDTH)
}

/// `<< ... 8 9 [10] 11 12 ... >>`; disabled jumps are wrapped in parentheses
fn pagination_bar(window: &PageWindow, current_page: usize, total_pages: usize) -> String {
    let mut parts = Vec::new();

    parts.push(if current_page == 1 { "(<<)" } else { "<<" }.to_string());
    if window.show_leading_ellipsis {
        parts.push("...".to_string());
    }
    for &page in &window.pages {
        if page == current_page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.show_trailing_ellipsis {
        parts.push("...".to_string());
    }
    parts.push(if current_page == total_pages { "(>>)" } else { ">>" }.to_string());

    parts.join(" ")
}
