use rust_chess_rules::{parse_move, Match};

fn main() {
    println!("=== Rust Chess Rules ===");
    println!("Board Representation: Mailbox (8x8 array)");
    println!();

    let mut game = Match::new();
    println!("Starting Position:");
    println!("{}", game);

    // Fool's mate, the shortest possible game
    for notation in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mover = game.current_player();
        let result = parse_move(notation).and_then(|(from, to)| game.perform_move(from, to));
        if let Err(e) = result {
            eprintln!("{}: {}", notation, e);
            return;
        }
        println!("{:?} plays {}", mover, notation);
    }

    println!();
    println!("{}", game);

    println!("Legend:");
    println!("  K/k = King, Q/q = Queen, R/r = Rook (White/Black)");
    println!("  B/b = Bishop, N/n = Knight, P/p = Pawn (White/Black)");
    println!("  .   = Empty square");
}
