//! Statistics reporting.

use console::style;

use crate::export::ExportState;

/// Print statistics for the run.
pub fn print_run_stats(state: &ExportState, crawled: usize) {
    println!();
    println!("{}", style("Run statistics:").bold());
    println!("  Crawled:  {}", crawled);
    println!("  Exported: {}", style(state.exported_count).green());
    if state.failed_count > 0 {
        println!("  Failed:   {}", style(state.failed_count).red());
    }
}
