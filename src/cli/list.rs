//! list subcommand
//!
//! Prints the registered checks in execution order.

use crate::checks;
use crate::runner::HEALTH_CHECK_NAME;

/// Execute the list command
pub fn execute() {
    println!("{} (mandatory, always first)", HEALTH_CHECK_NAME);
    for check in checks::registry() {
        println!("{}", check.name);
    }
}
