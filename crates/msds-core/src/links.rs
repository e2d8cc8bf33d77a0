use crate::config::Config;
use urlencoding::encode;

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Opens the primary PDF inline.
pub fn pdf_view_url(config: &Config, mid: &str) -> String {
    format!(
        "{}/api/msds/{}/download",
        trim_base(&config.api.base_url),
        encode(mid)
    )
}

/// Same endpoint as [`pdf_view_url`], asking the backend for an attachment disposition.
pub fn pdf_download_url(config: &Config, mid: &str) -> String {
    format!("{}?download=1", pdf_view_url(config, mid))
}

pub fn attachment_image_url(config: &Config, mid: &str, aid: &str) -> String {
    format!(
        "{}/api/msds/{}/attachment/{}",
        trim_base(&config.api.base_url),
        encode(mid),
        encode(aid)
    )
}

/// Detail page of a record; this is what QR codes encode.
pub fn detail_url(config: &Config, mid: &str) -> String {
    format!("{}/msds/{}", trim_base(&config.site.base_url), encode(mid))
}

/// PNG rendering of the record's QR code, pointing at [`detail_url`].
pub fn qr_image_url(config: &Config, mid: &str) -> String {
    let size = config.qr.size;
    format!(
        "{}?size={size}x{size}&data={}",
        config.qr.service_url,
        encode(&detail_url(config, mid))
    )
}

/// File name offered when the QR image is saved.
pub fn qr_file_name(mid: &str) -> String {
    format!("qr-code-{mid}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.api.base_url = "https://api.example.com/".into();
        config.site.base_url = "https://msds.example.com".into();
        config
    }

    #[test]
    fn builds_backend_urls() {
        let c = config();
        assert_eq!(
            pdf_view_url(&c, "M0001"),
            "https://api.example.com/api/msds/M0001/download"
        );
        assert_eq!(
            pdf_download_url(&c, "M0001"),
            "https://api.example.com/api/msds/M0001/download?download=1"
        );
        assert_eq!(
            attachment_image_url(&c, "M0001", "17"),
            "https://api.example.com/api/msds/M0001/attachment/17"
        );
    }

    #[test]
    fn detail_url_encodes_mid() {
        let c = config();
        assert_eq!(detail_url(&c, "M0001"), "https://msds.example.com/msds/M0001");
        assert_eq!(
            detail_url(&c, "M 1/2"),
            "https://msds.example.com/msds/M%201%2F2"
        );
    }

    #[test]
    fn qr_image_encodes_detail_url() {
        let c = config();
        assert_eq!(
            qr_image_url(&c, "M0001"),
            "https://api.qrserver.com/v1/create-qr-code/?size=300x300\
             &data=https%3A%2F%2Fmsds.example.com%2Fmsds%2FM0001"
        );
        assert_eq!(qr_file_name("M0001"), "qr-code-M0001.png");
    }

    #[test]
    fn qr_size_and_service_follow_config() {
        let mut c = config();
        c.qr.service_url = "https://qr.internal/render".into();
        c.qr.size = 120;
        let url = qr_image_url(&c, "M 1");
        assert!(url.starts_with("https://qr.internal/render?size=120x120&data="));
        assert!(url.ends_with("msds%2FM%25201"));
    }
}
