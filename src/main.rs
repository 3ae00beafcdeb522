use clap::{ArgAction, Parser, Subcommand};
use hotelbook::application::booking::BookingService;
use hotelbook::domain::booking::BookingId;
use hotelbook::domain::ports::{BookingStore, BookingStoreBox, RoomDirectory};
use hotelbook::infrastructure::in_memory::{InMemoryBookingStore, InMemoryRoomDirectory};
use hotelbook::infrastructure::notifier::TracingNotifier;
use hotelbook::infrastructure::payment::SmallPaymentProcessor;
#[cfg(feature = "storage-rocksdb")]
use hotelbook::infrastructure::rocksdb::RocksDBBookingStore;
use hotelbook::interfaces::csv::booking_reader::BookingReader;
use hotelbook::interfaces::csv::receipt_writer::{Receipt, ReceiptWriter};
use hotelbook::interfaces::csv::room_reader::RoomReader;
use hotelbook::interfaces::greeting::{DEFAULT_NAME, greet};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rooms CSV file (columns: id, capacity). Without it the hotel has no rooms.
    #[arg(long, env = "HOTELBOOK_ROOMS", global = true)]
    rooms: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "HOTELBOOK_DB_PATH", global = true)]
    db_path: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Book a room for every request in a CSV file and print the receipts
    Book {
        /// Booking requests CSV file (columns: id, check_in, check_out, guests, prepaid)
        input: PathBuf,
    },
    /// Cancel a booking and free its room
    Cancel { booking_id: String },
    /// Print how many guests the free rooms can still hold
    Places,
    /// Print a greeting
    Greet {
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Greet { name } => println!("{}", greet(&name)),
        Command::Book { input } => {
            let service = build_service(cli.rooms, cli.db_path).await?;
            book(&service, input).await?;
        }
        Command::Cancel { booking_id } => {
            let service = build_service(cli.rooms, cli.db_path).await?;
            let booking_id: BookingId = booking_id.parse().into_diagnostic()?;
            service.cancel_booking(&booking_id).await.into_diagnostic()?;
            println!("cancelled {booking_id}");
        }
        Command::Places => {
            let service = build_service(cli.rooms, cli.db_path).await?;
            let places = service.available_place_count().await.into_diagnostic()?;
            println!("{places}");
        }
    }

    Ok(())
}

/// Books every request of the input file, writing a receipt per success to stdout.
///
/// A request that cannot be read or booked is logged and skipped.
async fn book(service: &BookingService, input: PathBuf) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());

    for request in BookingReader::new(file).requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Error reading booking");
                continue;
            }
        };

        let request_id = request.id.clone();
        let price = service.calculate_price(&request);
        let record = match service.place_booking(request).await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(request = %request_id, error = %e, "Error processing booking");
                continue;
            }
        };

        writer
            .write_receipt(&Receipt {
                request: request_id,
                booking: record.booking_id,
                room: record.request.room_id.unwrap_or_default(),
                price,
            })
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn build_service(
    rooms_path: Option<PathBuf>,
    db_path: Option<PathBuf>,
) -> Result<BookingService> {
    let rooms = match rooms_path {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            InMemoryRoomDirectory::with_rooms(RoomReader::new(file).rooms().into_diagnostic()?)
        }
        None => {
            tracing::warn!("No rooms file given, every booking will fail");
            InMemoryRoomDirectory::new()
        }
    };

    let bookings = open_booking_store(db_path)?;

    // Rooms held by stored bookings are not free.
    for record in bookings.all().await.into_diagnostic()? {
        if let Some(room_id) = &record.request.room_id
            && let Err(e) = rooms.book_room(room_id).await
        {
            tracing::warn!(booking = %record.booking_id, error = %e, "Stored booking references an unknown room");
        }
    }

    Ok(BookingService::new(
        Box::new(rooms),
        Box::new(SmallPaymentProcessor::new()),
        bookings,
        Box::new(TracingNotifier),
    ))
}

fn open_booking_store(db_path: Option<PathBuf>) -> Result<BookingStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => Ok(Box::new(RocksDBBookingStore::open(path).into_diagnostic()?)),
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(_) => {
            tracing::warn!(
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
            );
            Ok(Box::new(InMemoryBookingStore::new()))
        }
        None => Ok(Box::new(InMemoryBookingStore::new())),
    }
}
