use crate::{
    ConvertArgs,
    build::{PageInfo, Pipeline, PipelineContext, ProcessingDocument, Renderer, SyntaxHighlighter},
    config::Config,
    report,
};

pub fn run(args: &ConvertArgs) -> Result<(), anyhow::Error> {
    let mut config = Config::load_from_arg(args.config_file.as_deref())?;
    apply_args(&mut config, args);

    let highlighter = SyntaxHighlighter::new(config.markdown.highlight_theme.as_deref());
    let highlight_css = highlighter.theme_css()?;
    let renderer = Renderer::new()?;

    let ctx = PipelineContext::new(
        PageInfo {
            title: config.document.title.clone(),
            lang: config.document.lang.clone(),
        },
        &config.markdown,
        highlight_css,
        &highlighter,
        &renderer,
    );

    log::info!(
        "converting {} -> {}",
        config.input.display(),
        config.output.display()
    );

    let mut doc = ProcessingDocument::new(&config.input, &config.output);
    Pipeline::default_pipeline().run(&mut doc, &ctx)?;

    report::print_success(doc.output_path())?;

    if args.open
        && let Err(e) = open::that(doc.output_path())
    {
        eprintln!("Failed to open browser: {}", e);
    }

    Ok(())
}

/// Command line values take precedence over the config file.
fn apply_args(config: &mut Config, args: &ConvertArgs) {
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(title) = &args.title {
        config.document.title = title.clone();
    }
    if let Some(theme) = &args.highlight_theme {
        config.markdown.highlight_theme = Some(theme.clone());
    }
}
