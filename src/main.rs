//! Line-oriented driver: reads order records from stdin, prints trades and the book.
//!
//! Each line is `side,id,price,qty` or `side,id,price,qty,peakSize`. Malformed
//! lines are logged and skipped. Set `RUST_LOG` to see engine logs on stderr.

use std::io::{self, BufRead, Write};

use clob_engine::{parse_order, render_book, render_trades, Engine};
use log::warn;

fn main() -> io::Result<()> {
    let _ = env_logger::try_init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut engine = Engine::new();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let order = match parse_order(&line) {
            Ok(order) => order,
            Err(e) => {
                warn!("skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };
        let trades = engine.submit(order);
        write!(out, "{}", render_trades(&trades))?;
        writeln!(out, "{}", render_book(engine.book()))?;
        out.flush()?;
    }
    Ok(())
}
