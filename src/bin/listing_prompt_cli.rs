use anyhow::{anyhow, Result};
use listing_utils::{
    client::GenerationClient,
    delivery::{reference_image_filename, save_bytes, save_text},
    prompting::{build_product_listing, ImagePromptRequest, ProductForm},
    text_utils::{DescriptionCleaner, SizeExtractor},
};
use std::path::{Path, PathBuf};

// cargo run -p listing_utils --bin listing_prompt_cli -- --product_url "https://shop.example.com/products/dino-tee"
// cargo run -p listing_utils --bin listing_prompt_cli -- --text_file pasted.txt --title "Dino Tee"

#[tokio::main]
pub async fn main() -> Result<()> {
    let matches = clap::Command::new("Listing Prompt Generator")
        .version("1.0")
        .about("Builds product listing prompts from a product URL or pasted product text")
        .arg(
            clap::Arg::new("product_url")
                .help("The product page URL (must contain /products/)")
                .long("product_url")
                .required(false),
        )
        .arg(
            clap::Arg::new("text_file")
                .help("Pasted product text; builds the listing payload locally, no network")
                .long("text_file")
                .required(false),
        )
        .arg(
            clap::Arg::new("title")
                .help("Product title, used as a fallback source for sizes")
                .long("title")
                .required(false),
        )
        .arg(
            clap::Arg::new("image_url")
                .help("Product image URL for the listing payload")
                .long("image_url")
                .required(false),
        )
        .arg(
            clap::Arg::new("api_url")
                .help("Generation endpoint; defaults to LISTING_API_URL")
                .long("api_url")
                .required(false),
        )
        .arg(
            clap::Arg::new("model_count")
                .help("How many models in the generated scene")
                .long("model_count")
                .required(false),
        )
        .arg(
            clap::Arg::new("ethnicity1")
                .long("ethnicity1")
                .required(false),
        )
        .arg(
            clap::Arg::new("ethnicity2")
                .long("ethnicity2")
                .required(false),
        )
        .arg(
            clap::Arg::new("age_category")
                .long("age_category")
                .required(false),
        )
        .arg(
            clap::Arg::new("show_movement")
                .long("show_movement")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("add_sneakers")
                .long("add_sneakers")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("add_socks")
                .long("add_socks")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("add_shoes")
                .long("add_shoes")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("add_work_boots")
                .long("add_work_boots")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("max_chars")
                .help("Character budget for the cleaned description")
                .long("max_chars")
                .required(false),
        )
        .arg(
            clap::Arg::new("boilerplate")
                .help("TOML file with a `boilerplate` phrase array")
                .long("boilerplate")
                .required(false),
        )
        .arg(
            clap::Arg::new("out")
                .help("Write the prompt JSON here instead of stdout only")
                .long("out")
                .required(false),
        )
        .arg(
            clap::Arg::new("download_image")
                .help("Also download the reference image next to the output")
                .long("download_image")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if let Some(text_file) = matches.get_one::<String>("text_file") {
        build_local_listing(&matches, text_file)
    } else if matches.get_one::<String>("product_url").is_some() {
        generate_remote_prompt(&matches).await
    } else {
        Err(anyhow!("pass either --product_url or --text_file"))
    }
}

fn build_local_listing(matches: &clap::ArgMatches, text_file: &str) -> Result<()> {
    let description = std::fs::read_to_string(text_file)?;
    let form = ProductForm {
        title: matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or_default(),
        description,
        image_url: matches.get_one::<String>("image_url").cloned(),
    };

    let mut cleaner = DescriptionCleaner::new();
    if let Some(max_chars) = matches.get_one::<String>("max_chars") {
        cleaner = cleaner.max_chars(max_chars.parse()?);
    }
    if let Some(boilerplate) = matches.get_one::<String>("boilerplate") {
        cleaner = cleaner.boilerplate_from_toml(Path::new(boilerplate))?;
    }

    let listing = build_product_listing(&form, &cleaner, &SizeExtractor::new());
    let rendered = serde_json::to_string_pretty(&listing)?;
    println!("{rendered}");
    write_output(matches, &rendered)
}

async fn generate_remote_prompt(matches: &clap::ArgMatches) -> Result<()> {
    let product_url = matches.get_one::<String>("product_url").unwrap();
    let mut request = ImagePromptRequest::new(product_url)?;
    if let (Some(ethnicity1), Some(ethnicity2)) = (
        matches.get_one::<String>("ethnicity1"),
        matches.get_one::<String>("ethnicity2"),
    ) {
        request = request.ethnicities(ethnicity1, ethnicity2);
    }
    if let Some(model_count) = matches.get_one::<String>("model_count") {
        request = request.model_count(model_count.parse()?);
    }
    if let Some(age_category) = matches.get_one::<String>("age_category") {
        request = request.age_category(age_category);
    }
    if matches.get_flag("show_movement") {
        request = request.show_movement();
    }
    if matches.get_flag("add_sneakers") {
        request = request.add_sneakers();
    }
    if matches.get_flag("add_socks") {
        request = request.add_socks();
    }
    if matches.get_flag("add_shoes") {
        request = request.add_shoes();
    }
    if matches.get_flag("add_work_boots") {
        request = request.add_work_boots();
    }

    let client = match matches.get_one::<String>("api_url") {
        Some(api_url) => GenerationClient::new(api_url),
        None => GenerationClient::from_env()?,
    };
    let prompt = client.generate_image_prompt(&request).await?;
    let rendered = prompt.to_json_pretty();
    println!("{rendered}");
    write_output(matches, &rendered)?;

    if matches.get_flag("download_image") {
        match prompt.reference_image() {
            Some(image_url) => download_reference_image(&client, image_url).await?,
            None => eprintln!("No reference image in the generated prompt"),
        }
    }
    Ok(())
}

async fn download_reference_image(client: &GenerationClient, image_url: &str) -> Result<()> {
    let file_name = reference_image_filename(image_url);
    match client.fetch_image(image_url).await {
        Ok(bytes) => {
            let written = save_bytes(&bytes, &PathBuf::from(&file_name))?;
            println!("Reference image saved to {}", written.display());
        }
        Err(e) => {
            // Same fallback as a blocked download: hand the user the direct link.
            eprintln!("Download failed ({e}); fetch it directly: {image_url}");
        }
    }
    Ok(())
}

fn write_output(matches: &clap::ArgMatches, rendered: &str) -> Result<()> {
    if let Some(out) = matches.get_one::<String>("out") {
        let written = save_text(rendered, Path::new(out))?;
        println!("Saved to {}", written.display());
    }
    Ok(())
}
