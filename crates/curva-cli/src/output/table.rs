use curva_core::model::Extraction;

pub fn print_extraction(extraction: &Extraction) {
    if extraction.sector_known() {
        println!("Sector: {}\n", extraction.sector);
    } else {
        println!("Sector: {} (not detected, pass --sector on export)\n", extraction.sector);
    }

    let name_width = extraction
        .products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Product".len());

    println!(
        "  {:<width$}  {:>12}  {:>14}",
        "Product",
        "Quantity",
        "Value",
        width = name_width
    );
    for p in &extraction.products {
        println!(
            "  {:<width$}  {:>12.3}  {:>14.2}",
            p.name,
            p.quantity,
            p.value,
            width = name_width
        );
    }

    let total: f64 = extraction.products.iter().map(|p| p.value).sum();
    println!(
        "\n  {} product(s), total value {:.2}",
        extraction.products.len(),
        total
    );
}
