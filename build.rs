use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-env-changed=SAESR_SIDEBAR_SETTINGS");

    // Output directory for the bundle served by `asset!`
    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // Sidebar, drawer overlay and page styles are all imported from main.css
    let mut stylesheet = bundler
        .bundle(Path::new("assets/css/main.css"))
        .expect("Failed to bundle CSS");

    // Minify in place before printing
    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    // Single stylesheet linked by RoleShell
    fs::write("assets/dist/bundle.css", css.code)
        .expect("Failed to write bundle.css");

    println!("Sidebar CSS bundled: assets/dist/bundle.css");
}
