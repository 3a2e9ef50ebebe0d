use probability_rs::{LogicalOps, Probability, Result};

/// Walks the combinator table for two independent events, mirroring
/// how a caller would compose forecast probabilities.
fn main() -> Result<()> {
    let first = Probability::new(0.6)?;
    let second = Probability::new(0.4)?;

    println!("first event:          {first}");
    println!("second event:         {second}");
    println!();
    println!("both occur (AND):     {}", first.and(second)?);
    println!("at least one (OR):    {}", first.or(second)?);
    println!("exactly one (XOR):    {}", first.xor(second)?);
    println!("first only (SUB):     {}", first.difference(second)?);
    println!("second only (SUB):    {}", second.difference(first)?);
    println!("first fails (NOT):    {}", first.complement()?);
    println!();

    // Compound forms fold a chain of independent events in place.
    let mut running = Probability::new(0.5)?;
    running &= Probability::new(0.5)?;
    running |= Probability::new(0.25)?;
    println!("running combination:  {running}");

    Ok(())
}
