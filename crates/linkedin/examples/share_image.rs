//! Uploads an image and shares it on the member's feed.
//!
//! Set LINKEDIN_ACCESS_TOKEN (with the `w_member_social` scope) in an .env
//! file or export it manually as an environmental variable for this to work.
//!
//! Usage: `share_image <person id> <image path or url> [text]`

use linkedin::{
    model::{ShareOptions, Urn},
    prelude::*,
    LinkedIn, MediaSource,
};

use std::env;

#[tokio::main]
async fn main() {
    // You can use any logger for debugging.
    libs::env_logger::init();

    let mut args = env::args().skip(1);
    let (person, image) = match (args.next(), args.next()) {
        (Some(person), Some(image)) => (person, image),
        _ => {
            eprintln!("usage: share_image <person id> <image path or url> [text]");
            std::process::exit(2);
        }
    };
    let text = args.next().unwrap_or_else(|| "Shared from Rust".to_owned());

    let linkedin = LinkedIn::from_env().unwrap_or_else(|| {
        panic!(
            "No access token configured. Make sure that either the \
            `env-file` feature is enabled, or that `LINKEDIN_ACCESS_TOKEN` \
            is exported."
        )
    });

    let author = Urn::person(&person).unwrap();
    let source = MediaSource::from_url(&image).unwrap();

    let asset = linkedin.upload_asset(&source, &author, None).await.unwrap();
    println!("Uploaded {}", asset);

    let share = ShareOptions::new(&author).text(text).image(asset, None);
    let response = linkedin.create_share(&share).await.unwrap();
    println!("Created share: {}", response);
}
