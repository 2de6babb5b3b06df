//! Variant listing command

use snapdiff_core::Variant;

pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    for variant in Variant::ALL {
        let spec = variant.spec();
        println!(
            "{:<16} key={} label={}",
            spec.name,
            spec.key_fields.join("+"),
            spec.id_label
        );
    }
    Ok(())
}
