use std::io;

use boxoffice::{Auditorium, BookingQueue};

const ROWS: u32 = 5;
const COLUMNS: u32 = 10;
const QUEUE_CAPACITY: usize = 50;

const MOVIES: [&str; 4] = [
    "1. Avengers: Endgame",
    "2. Inception",
    "3. Interstellar",
    "4. The Dark Knight",
];

fn main() {
    println!("Available Movies:");
    for movie in &MOVIES {
        println!("{}", movie);
    }
    println!("Select a movie to book tickets (1-4):");

    let mut input = String::new();
    let choice = match io::stdin().read_line(&mut input) {
        Ok(_) => input.trim().parse::<usize>().ok(),
        Err(_) => None,
    };
    let movie = match choice {
        Some(choice @ 1..=4) => MOVIES[choice - 1],
        _ => {
            println!("Invalid movie choice. Exiting system.");
            return;
        }
    };
    println!("You selected: {}", movie);

    let mut auditorium = Auditorium::new(ROWS, COLUMNS);
    let mut requests: BookingQueue<u32> = BookingQueue::with_capacity(QUEUE_CAPACITY);

    println!();
    println!("--- Online Movie Ticket Booking System ---");
    println!("Type 'help' for the list of commands.");

    loop {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => match input.trim().split(' ').collect::<Vec<_>>().as_slice() {
                [""] => {}
                ["seats"] => {
                    println!();
                    println!("Seat Availability:");
                    print!("{}", auditorium);
                }
                ["request", n] => match n.trim().parse::<u32>() {
                    Ok(seat) if auditorium.layout().contains(seat) => {
                        if requests.enqueue(seat) {
                            println!("Booking request for seat {} added to queue.", seat);
                        } else {
                            println!("Booking queue is full. Request for seat {} dropped.", seat);
                        }
                    }
                    _ => println!(
                        "Invalid seat number. Please select a seat between 1 and {}.",
                        auditorium.seat_count()
                    ),
                },
                ["process"] => match requests.dequeue() {
                    Some(seat) => match auditorium.book(seat) {
                        Ok(()) => println!("Seat {} successfully booked.", seat),
                        Err(_) => println!("Seat {} is already booked or invalid.", seat),
                    },
                    None => println!("No booking requests in the queue."),
                },
                ["cancel", n] => match n.trim().parse::<u32>() {
                    Ok(seat) if auditorium.layout().contains(seat) => {
                        match auditorium.cancel(seat) {
                            Ok(()) => println!("Booking for seat {} has been canceled.", seat),
                            Err(_) => {
                                println!("Seat {} is not currently booked or invalid.", seat)
                            }
                        }
                    }
                    _ => println!(
                        "Invalid seat number. Please select a seat between 1 and {}.",
                        auditorium.seat_count()
                    ),
                },
                ["stats"] => {
                    let occupancy = auditorium.occupancy();
                    println!();
                    println!("Statistics:");
                    println!("Total Seats: {}", occupancy.total);
                    println!("Booked Seats: {}", occupancy.booked);
                    println!("Available Seats: {}", occupancy.available);
                }
                ["pending"] => {
                    if requests.is_empty() {
                        println!("No booking requests in the queue.");
                    } else {
                        print!("Pending requests:");
                        for seat in &requests {
                            print!(" {}", seat);
                        }
                        println!();
                    }
                }
                ["json"] => {
                    let snapshot = serde_json::json!({
                        "occupancy": auditorium.occupancy(),
                        "seats": auditorium.seats().collect::<Vec<_>>(),
                    });
                    match serde_json::to_string_pretty(&snapshot) {
                        Ok(rendered) => println!("{}", rendered),
                        Err(err) => eprintln!("error: {}", err),
                    }
                }
                ["help"] => print_help(),
                ["exit"] | ["quit"] => {
                    println!(
                        "Exiting system. Thank you for using the movie ticket booking system."
                    );
                    break;
                }
                l => println!("Unrecognized command: {:?}", l),
            },
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  seats          display seat availability");
    println!("  request <n>    queue a booking request for seat <n>");
    println!("  process        book the oldest request in the queue");
    println!("  cancel <n>     cancel the booking for seat <n>");
    println!("  stats          show total, booked, and available counts");
    println!("  pending        list queued requests, oldest first");
    println!("  json           print a JSON snapshot of the auditorium");
    println!("  help           show this list");
    println!("  exit           leave the system");
}
