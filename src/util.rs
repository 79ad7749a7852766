use color_eyre::eyre::{self, WrapErr};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tera::Tera;

/// Delete all contents of a directory without modifying the directory itself
///
/// This function logs errors but otherwise ignores them and does not fail
pub fn delete_dir_contents<P: AsRef<Path>>(path: P) {
    match fs::read_dir(path) {
        Err(e) => warn!("could not read output dir: {}", e),
        Ok(dir) => {
            for entry in dir {
                match entry {
                    Err(e) => warn!("entry error in output dir: {}", e),
                    Ok(entry) => {
                        let path = entry.path();

                        if path.is_dir() {
                            if let Err(e) = fs::remove_dir_all(path) {
                                warn!("could not delete directory in output dir: {}", e);
                            };
                        } else if let Err(e) = fs::remove_file(path) {
                            warn!("could not delete file in output dir: {}", e);
                        }
                    }
                }
            }
        }
    }
}

pub fn render(tera: &Tera, template_name: &str, context: &tera::Context) -> eyre::Result<String> {
    tera.render(template_name, context)
        .wrap_err(format!("could not render template: {}", template_name))
}

pub fn render_to(
    tera: &Tera,
    template_name: &str,
    context: &tera::Context,
    write: impl Write,
) -> eyre::Result<()> {
    tera.render_to(template_name, context, write)
        .wrap_err(format!("could not render template: {}", template_name))
}

pub fn write_template(
    tera: &Tera,
    template_name: &str,
    context: &tera::Context,
    file_path: &Path,
) -> eyre::Result<()> {
    debug!("writing template to file: {:?}", file_path);
    let output_file = File::create(file_path)
        .wrap_err(format!("could not create file: {:?}", file_path))?;
    render_to(tera, template_name, context, output_file)
}
