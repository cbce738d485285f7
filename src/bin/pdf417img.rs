//! Command-line PDF417 scanner
//!
//! Scans image files for PDF417 symbols and prints what they contain.
//! `--self-test` renders a symbol with the built-in writer instead and scans
//! that, which is handy for checking a build without sample images.
//!
//! Build with: `cargo build --bin pdf417img` (uses default features)

use clap::{ArgAction, Parser};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::Write;
use std::process;
use zedbar_pdf417::{config::*, DecoderConfig, Image, Pdf417Writer, Scanner, Symbol};

/// Scan and decode PDF417 symbols from one or more image files
#[derive(Parser)]
#[command(name = "pdf417img")]
#[command(version)]
#[command(about = "Scan and decode PDF417 symbols from one or more image files", long_about = None)]
struct Args {
    /// Minimal output, only print decoded symbol data
    #[arg(short, long)]
    quiet: bool,

    /// Output decoded symbol data without converting charsets
    #[arg(long)]
    raw: bool,

    /// More logging; repeat for more detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Decode every symbol in an image instead of the first
    #[arg(long)]
    multiple: bool,

    /// Retry on the inverted image when nothing is found
    #[arg(long)]
    test_inverted: bool,

    /// Print error correction details and macro metadata for each symbol
    #[arg(long)]
    details: bool,

    /// Render TEXT as a symbol and scan it instead of reading files
    #[arg(long, value_name = "TEXT")]
    self_test: Option<String>,

    /// Data columns of the self-test symbol
    #[arg(long, default_value_t = 4, requires = "self_test")]
    columns: u32,

    /// Error correction level of the self-test symbol
    #[arg(long, default_value_t = 2, requires = "self_test")]
    ec_level: u32,

    /// Also write the self-test symbol to this PNG file
    #[arg(long, value_name = "PATH", requires = "self_test")]
    save: Option<String>,

    /// Image files to scan
    #[arg(required_unless_present = "self_test")]
    files: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to install logger: {e}");
    }

    let config = DecoderConfig::new()
        .find_multiple(Pdf417, args.multiple)
        .test_inverted(args.test_inverted);
    let scanner = Scanner::with_config(config);

    let mut total_symbols = 0;
    let mut images = 0;

    if let Some(text) = &args.self_test {
        let image = match render(&args, text) {
            Ok(image) => image,
            Err(e) => {
                if !args.quiet {
                    eprintln!("Failed to render self-test symbol: {e}");
                }
                process::exit(1);
            }
        };
        total_symbols += scan(&args, &scanner, &image, "self-test");
        images += 1;
    }

    for filename in &args.files {
        let img = match ::image::ImageReader::open(filename) {
            Ok(reader) => match reader.decode() {
                Ok(img) => img,
                Err(e) => {
                    if !args.quiet {
                        eprintln!("Failed to decode image '{filename}': {e}");
                    }
                    process::exit(1);
                }
            },
            Err(e) => {
                if !args.quiet {
                    eprintln!("Failed to open image '{filename}': {e}");
                }
                process::exit(1);
            }
        };

        let image = Image::from(&img.to_luma8());
        total_symbols += scan(&args, &scanner, &image, filename);
        images += 1;
    }

    if !args.quiet {
        if total_symbols == 0 {
            eprintln!("No barcodes found");
            process::exit(1);
        } else {
            eprintln!("scanned {total_symbols} barcode symbols from {images} image(s)");
        }
    } else if total_symbols == 0 {
        process::exit(1);
    }
}

/// Render the self-test symbol, saving it first if asked to
fn render(args: &Args, text: &str) -> Result<Image, Box<dyn std::error::Error>> {
    let bits = Pdf417Writer::new(args.columns, args.ec_level)?.encode_bytes(text.as_bytes())?;
    let image = Image::from(&bits);
    if let Some(path) = &args.save {
        let gray = ::image::GrayImage::from_raw(image.width(), image.height(), image.data().to_vec())
            .ok_or("rendered image has the wrong size")?;
        gray.save(path)?;
        log::info!("self-test symbol written to {path}");
    }
    Ok(image)
}

/// Scan one image and print its symbols. Returns how many were found.
fn scan(args: &Args, scanner: &Scanner, image: &Image, name: &str) -> usize {
    let symbols = match scanner.scan(image) {
        Ok(symbols) => symbols,
        Err(e) => {
            if !args.quiet {
                eprintln!("Failed to scan '{name}': {e}");
            }
            process::exit(1);
        }
    };

    for symbol in &symbols {
        print_symbol(args, symbol);
    }
    symbols.len()
}

fn print_symbol(args: &Args, symbol: &Symbol) {
    let mut stdout = std::io::stdout();
    if args.raw {
        stdout.write_all(symbol.data()).ok();
        println!();
    } else if args.quiet {
        println!("{}", symbol.text());
    } else {
        println!("{}:{}", symbol.symbol_type(), symbol.text());
    }

    if args.details && !args.quiet {
        println!(
            "  ec level {}, {} errors corrected, {} erasures",
            symbol.ec_level(),
            symbol.corrected_errors(),
            symbol.erasures()
        );
        if let Some(metadata) = symbol.metadata() {
            println!(
                "  segment {} of file {:?}{}",
                metadata.segment_index(),
                metadata.file_id(),
                if metadata.is_last_segment() { " (last)" } else { "" }
            );
        }
    }
}
