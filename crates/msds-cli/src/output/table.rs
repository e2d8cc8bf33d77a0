use msds_core::catalog::{CatalogLabel, CatalogRow, Page};
use msds_core::import::ImportedAttachments;
use msds_core::model::AttachmentKind;
use msds_core::profile::{LabelView, MsdsProfile, NO_INFO};
use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` terminal columns. Hangul takes two columns per
/// character, so `{:<w$}` padding would misalign it.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn check(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}

fn print_label_group(heading: &str, labels: &[LabelView]) {
    println!("  {heading}:");
    if labels.is_empty() {
        println!("    {NO_INFO}");
        return;
    }

    let max_title = labels
        .iter()
        .map(|l| l.title.width())
        .max()
        .unwrap_or(10);

    for label in labels {
        let image_marker = if label.image_url.is_some() { " [img]" } else { "" };
        if label.description == label.title {
            println!("    {}{}", label.title, image_marker);
        } else {
            println!(
                "    {}  {}{}",
                pad(&label.title, max_title),
                label.description,
                image_marker
            );
        }
    }
}

pub fn print_profile(profile: &MsdsProfile) {
    println!("=== {} ({}) ===\n", profile.title, profile.mid);
    println!("  Category: {}", profile.category);
    match &profile.pdf {
        Some(pdf) => println!("  PDF:      {}", pdf.view_url),
        None => println!("  PDF:      -"),
    }
    println!();

    print_label_group(&AttachmentKind::WarningLabel.to_string(), &profile.warnings);
    print_label_group(
        &AttachmentKind::ProtectiveEquipment.to_string(),
        &profile.equipment,
    );
    println!(
        "  {}: {}",
        AttachmentKind::UsageLocation,
        profile.location_summary
    );
    println!();

    println!("  관련 법규: {}", profile.regulations.joined(", "));
    println!("  QR target: {}", profile.detail_url);
    println!("  QR image:  {}", profile.qr_image_url);

    if profile.dropped_attachments > 0 {
        println!(
            "\n  ({} attachment(s) with an unknown type were not shown)",
            profile.dropped_attachments
        );
    }
}

pub fn print_page(page: &Page<CatalogRow>, query: &str) {
    if query.trim().is_empty() {
        println!(
            "Page {}/{} - {} record(s), {} per page\n",
            page.page,
            page.total_pages.max(1),
            page.total,
            page.per_page
        );
    } else {
        println!(
            "Search '{}': page {}/{} - {} match(es)\n",
            query.trim(),
            page.page,
            page.total_pages.max(1),
            page.total
        );
    }

    if page.items.is_empty() {
        println!("  No records.");
        return;
    }

    let max_mid = page
        .items
        .iter()
        .map(|r| r.mid.width())
        .max()
        .unwrap_or(5)
        .max(3);
    let max_title = page
        .items
        .iter()
        .map(|r| r.title.width())
        .max()
        .unwrap_or(10)
        .max(5);

    println!(
        "  {}  {}  {:<4} {:<4} {:<4} {:>3} {:>3} {:>3}  Laws",
        pad("MID", max_mid),
        pad("Title", max_title),
        "OSH",
        "CHR",
        "PDF",
        "W",
        "E",
        "L"
    );
    for row in &page.items {
        println!(
            "  {}  {}  {:<4} {:<4} {:<4} {:>3} {:>3} {:>3}  {}",
            pad(&row.mid, max_mid),
            pad(&row.title, max_title),
            check(row.is_osh),
            check(row.is_chr),
            check(row.has_pdf),
            row.counts.warnings,
            row.counts.protective,
            row.counts.locations,
            row.regulations
        );
        if let Some(ref usage) = row.usage {
            println!("  {}  usage: {}", pad("", max_mid), usage);
        }
    }
}

pub fn print_labels(kind: AttachmentKind, labels: &[CatalogLabel]) {
    println!("{} ({})\n", kind, labels.len());
    if labels.is_empty() {
        println!("  {NO_INFO}");
        return;
    }

    for label in labels {
        let image_marker = if label.has_image { " [img]" } else { "" };
        println!("  {}{}  (aid {}, {})", label.title, image_marker, label.aid, label.mid);
        if let Some(ref category) = label.category {
            println!("    category: {category}");
        }
        if let Some(ref description) = label.description {
            if description != &label.title {
                println!("    {description}");
            }
        }
    }
}

pub fn print_imported(imported: &ImportedAttachments) {
    println!("Imported {} attachment(s)\n", imported.attachments.len());
    for att in &imported.attachments {
        let kind = att
            .kind()
            .map(|k| k.to_string())
            .unwrap_or_else(|| format!("unknown type {}", att.type_code));
        let file = att.file_loc.as_deref().unwrap_or("-");
        println!("  {:>6}  {:<12}  {}  ({})", att.aid, kind, att.title, file);
    }

    if !imported.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &imported.warnings {
            println!("  - row {}: {}", w.row, w.reason);
        }
    }
}
