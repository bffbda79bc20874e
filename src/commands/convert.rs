//! Runs the `convert` subcommand.

use clap;
use std::path::{Path,PathBuf};
use log::{error,info};
use crate::apn;
use super::CommandError;
use crate::STDRESULT;

const RCH: &str = "unreachable was reached";

pub fn convert(cmd: &clap::ArgMatches) -> STDRESULT {
    let source = cmd.get_one::<String>("source").expect(RCH);
    let maybe_output = cmd.get_one::<String>("output");

    let mut converter = apn::Converter::new(cmd.get_flag("enhanced"));
    converter.set_no_disambiguation(cmd.get_flag("no-disambiguation"));
    converter.set_lowercase(cmd.get_flag("lowercase"));

    let input_files = crate::gather_input_files(source)?;
    if input_files.len()==0 {
        return Err(Box::new(CommandError::NothingConverted));
    }
    let output_dir: Option<PathBuf> = match maybe_output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(Path::new(dir).to_path_buf())
        },
        None => {
            if input_files.len()>1 {
                error!("an output directory is required to convert more than one file");
                return Err(Box::new(CommandError::InvalidCommand));
            }
            None
        }
    };
    if cmd.get_flag("lemmas") && output_dir.is_none() {
        error!("the lemma inventory requires an output directory");
        return Err(Box::new(CommandError::InvalidCommand));
    }

    for file in &input_files {
        info!("treating {}",file.display());
        let text = crate::read_file_text(file)?;
        let (content,errors) = converter.convert(&text);
        for (num,err) in &errors {
            error!("{} line {}: {}",file.display(),num,err);
        }
        // a file that yields nothing but its header is refused
        if errors.len()>0 && content.lines().count()<=1 {
            error!("no line of {} could be converted",file.display());
            return Err(Box::new(CommandError::NothingConverted));
        }
        match &output_dir {
            Some(dir) => std::fs::write(crate::output_path(file,dir),&content)?,
            None => print!("{}",content)
        }
    }

    if cmd.get_flag("lemmas") {
        if let Some(dir) = &output_dir {
            let listing = converter.lemmas().iter().cloned().collect::<Vec<String>>().join("\n");
            std::fs::write(dir.join("_lemma.txt"),listing + "\n")?;
            info!("{} lemmas written to _lemma.txt",converter.lemmas().len());
        }
    }
    Ok(())
}
