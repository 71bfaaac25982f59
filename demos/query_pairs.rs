/// `QueryPairs` usage example
use urlquery::{Charset, QueryPairs};

fn main() -> Result<(), urlquery::QueryError> {
    // Parse a query string
    let raw = "name=John&age=30&city=T%C5%8Dky%C5%8D&debug";
    let mut query = QueryPairs::parse(raw, Charset::utf_8())?;

    // Get values
    println!("name: {:?}", query.get("name")); // Some("John")
    println!("city: {:?}", query.get("city")); // Some("Tōkyō")
    println!("debug present: {}", query.contains_key("debug")); // true
    println!();

    // Append, replace and remove
    query.append("country", "Japan");
    query.set("age", Some("31"));
    query.remove("debug");
    println!("After edits: {query}"); // name=John&age=31&city=T%C5%8Dky%C5%8D&country=Japan
    println!();

    // Keyless pairs are dropped when building
    query.add(None, Some("ignored"));
    println!("Lenient: {}", query.build(Charset::utf_8(), false));

    // Strict mode escapes every reserved character
    query.append("redirect", "https://example.com/?a=1");
    println!("Strict: {}", query.build(Charset::utf_8(), true));

    // Pass-through keeps a pre-encoded query exactly as it was
    let raw = QueryPairs::parse("signature=%2Br1ek%3D", Charset::NONE)?;
    println!("Pass-through: {raw}"); // signature=%2Br1ek%3D

    Ok(())
}
