use pof_core::report::{LogLine, Stats};

pub fn print_log(lines: &[LogLine]) {
    println!();
    println!("Log:");
    for line in lines {
        println!("  {line}");
    }
}

pub fn print_stats(stats: &Stats) {
    println!();
    println!("Statistics:");
    println!("  Total records : {}", stats.total);
    println!("  Located       : {}", stats.successful);
    println!("  Not located   : {}", stats.failed());
    match stats.success_rate() {
        Some(rate) => println!("  Success rate  : {:.2}%", rate * 100.0),
        None => println!("  Success rate  : n/a"),
    }
}
