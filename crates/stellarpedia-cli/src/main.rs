use anyhow::{Context, Result, bail};
use stellarpedia_config::Config;
use stellarpedia_engine::{
    DataResolver, ElementRenderer, JsonFileRepository, KebabNormalizer, Localizer, MapLocalizer, NoData,
    RenderedElement, Stellarpedia, load_data, load_localization,
};
use std::{env, process, sync::Arc};

fn usage() -> ! {
    eprintln!("Usage: stellarpedia-cli [<book> <chapter> <entry>]");
    process::exit(2);
}

fn build_renderer(config: &Config) -> Result<ElementRenderer> {
    let localizer: Arc<dyn Localizer> = match &config.localization_path {
        Some(path) => Arc::new(
            load_localization(path)
                .with_context(|| format!("loading localization from {}", path.display()))?,
        ),
        None => Arc::new(MapLocalizer::default()),
    };
    let data: Arc<dyn DataResolver> = match &config.data_path {
        Some(path) => {
            Arc::new(load_data(path).with_context(|| format!("loading data from {}", path.display()))?)
        }
        None => Arc::new(NoData),
    };
    Ok(ElementRenderer::new(
        localizer,
        data,
        Arc::new(KebabNormalizer),
        config.asset_base_url.clone(),
    ))
}

fn print_element(element: &RenderedElement) {
    match element {
        RenderedElement::Header(text) => println!("# {text}"),
        RenderedElement::Text(text) | RenderedElement::Raw(text) => println!("{text}"),
        RenderedElement::Image(image) => match &image.subtitle {
            Some(subtitle) => println!("[image {}] {subtitle}", image.url),
            None => println!("[image {}]", image.url),
        },
        RenderedElement::Row(row) => {
            let marker = if row.is_header { "|=" } else { "|" };
            println!("{marker} {} |", row.content.join(" | "));
        }
        RenderedElement::Separator => println!("----"),
        RenderedElement::Spacer | RenderedElement::Missing => println!(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if !matches!(args.len(), 0 | 3) {
        usage();
    }

    let config_path = Config::config_path();
    let Some(config) = Config::load()? else {
        bail!(
            "no configuration found at {}; set content_path there first",
            config_path.display()
        );
    };
    log::info!("Using content from {}", config.content_path.display());

    let renderer = build_renderer(&config)?;
    let repository = Arc::new(JsonFileRepository::new(&config.content_path));
    let mut stellarpedia =
        Stellarpedia::new(repository, renderer).with_default_entry(config.default_entry.clone());

    stellarpedia.load().await?;

    let selection = match args.as_slice() {
        [book, chapter, entry] => stellarpedia.set_selected_entry(book, chapter, entry),
        _ => stellarpedia.select_default(),
    };
    let Some(selection) = selection.cloned() else {
        bail!("unable to select the requested entry");
    };

    if let Some(breadcrumb) = &selection.breadcrumb {
        println!("{breadcrumb}");
        println!();
    }
    if let Some(entry) = &selection.entry {
        for element in stellarpedia.render_entry(entry) {
            print_element(&element);
        }
    }

    Ok(())
}
