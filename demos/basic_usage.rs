// ============================================================================
// Basic Usage Example
// ============================================================================

use num_radix::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), RadixError> {
    println!("=== Radix Transcoding Example ===\n");

    // Presets cover the common notations
    let dozenal = RadixAlphabet::dozenal();
    let hex = RadixAlphabet::hex();
    println!("Dozenal alphabet: base {}, separator '{}'", dozenal.base(), dozenal.separator());

    // Integers and fractions with the default shortest output
    println!("\n=== Encoding ===");
    for n in [13, 144, -1728] {
        println!("  {:>6} -> {}", n, dozenal.encode(n, &FormatSpec::default())?);
    }
    println!("  1/3    -> {}", dozenal.encode(1.0 / 3.0, &FormatSpec::default())?);
    println!("  0.1    -> {}", dozenal.encode(0.1, &FormatSpec::default())?);

    // Fixed scale rounds half-up and carries through the integer part
    let spec = FormatSpec::fixed(2).with_sign(SignDisplay::Always);
    println!("  π      -> {}", dozenal.encode(std::f64::consts::PI, &spec)?);
    println!("  0.9999 -> {}", dozenal.encode(0.9999, &FormatSpec::fixed(1))?);

    // Grouping and scientific notation
    let grouped = FormatSpec::default().with_grouping(true);
    println!("  2^40   -> {}", hex.encode(1u64 << 40, &grouped)?);
    let scientific: FormatSpec = ".4e".parse()?;
    println!("  N_A    -> {}", dozenal.encode(6.02214076e23, &scientific)?);

    // Exact decimals
    let price = Decimal::new(1995, 2);
    println!("  19.95  -> {}", dozenal.encode(price, &FormatSpec::default())?);

    // Decoding is the inverse
    println!("\n=== Decoding ===");
    for text in ["11", "-EE", "0;6", "1;4e+02"] {
        println!("  {:>8} -> {}", text, dozenal.decode(text)?);
    }
    println!("  {:>8} -> {}", "0;9", dozenal.decode_decimal("0;9")?);

    match hex.decode("12G") {
        Ok(number) => println!("  unexpected: {}", number),
        Err(e) => println!("  12G      -> error: {}", e),
    }

    // Custom alphabets with multi-character symbols
    println!("\n=== Custom Alphabet ===");
    let tally = RadixAlphabetBuilder::from_symbols(["nil", "one", "two"])
        .separator(" point ")
        .negative_sign("minus ")
        .build()?;
    println!("  -5.5   -> {}", tally.encode(-5.5, &FormatSpec::fixed(2))?);
    println!("  back   -> {}", tally.decode("minus onetwo point oneoneone")?);

    // Display adapter
    println!("\n=== Display ===");
    let wrapped = dozenal.wrap(299_792_458);
    println!("  {{}}     -> {}", wrapped);
    println!("  {{:+}}   -> {:+}", wrapped);
    println!("  {{:>12}} -> [{:>12}]", wrapped);
    println!("  ,d     -> {}", wrapped.format_str(",d")?);

    Ok(())
}
