//! Table command implementation.

use crate::error::Result;
use crate::output::Formatter;
use floodrisk_domain::DamageTable;

/// Print the damage table.
pub fn execute_table(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_damage_table(DamageTable::standard())?);
    Ok(())
}
