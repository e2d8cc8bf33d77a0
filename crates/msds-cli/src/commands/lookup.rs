use msds_core::classify::{derive_regulations, describe_tagged};
use msds_core::config::Config;
use msds_core::error::MsdsError;
use msds_core::links;
use msds_core::model::Flag;

pub fn regulations(osh: &str, chr: &str, usage: Option<&str>) -> Result<(), MsdsError> {
    let set = derive_regulations(&Flag::from(osh), &Flag::from(chr), usage);
    for name in set.names() {
        println!("{name}");
    }
    Ok(())
}

pub fn describe(domain: &str, title: &str) -> Result<(), MsdsError> {
    let description = describe_tagged(title, domain)?;
    println!("{description}");
    Ok(())
}

pub fn links(mid: &str, config: &Config) -> Result<(), MsdsError> {
    println!("PDF view:     {}", links::pdf_view_url(config, mid));
    println!("PDF download: {}", links::pdf_download_url(config, mid));
    println!("QR target:    {}", links::detail_url(config, mid));
    println!(
        "QR image:     {}  (save as {})",
        links::qr_image_url(config, mid),
        links::qr_file_name(mid)
    );
    Ok(())
}
