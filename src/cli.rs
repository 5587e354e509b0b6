use std::process::ExitCode;

use anyhow::Result;

use crate::{
    catalog::{AlgorithmInfo, Catalog},
    config::{Config, ConfigBuilder},
    data::{Key, Request, Response},
    engine::{Defaults, Dispatcher},
};

fn configure() -> Result<Config> {
    let config_builder =
        ConfigBuilder::new().with_dirs(&std::env::var).with_config(None)?.with_env(&std::env::var);
    Ok(config_builder.build())
}

fn dispatcher() -> Result<Dispatcher<crate::cipher::CryptoProvider>> {
    let config = configure()?;
    let defaults = Defaults { shift: config.shift(), keyword: config.keyword().to_string() };
    Ok(Dispatcher::new(defaults))
}

fn print_response(response: &Response, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(response)?);
    } else {
        println!("{}", response.result);
    }
    Ok(())
}

pub fn encrypt(
    algorithm: &str,
    text: &str,
    maybe_key: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let request = Request::new(text, algorithm, maybe_key.map(Key::from));
    let response = dispatcher()?.encrypt(&request)?;
    print_response(&response, json)?;
    Ok(ExitCode::SUCCESS)
}

pub fn decrypt(
    algorithm: &str,
    text: &str,
    maybe_key: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let request = Request::new(text, algorithm, maybe_key.map(Key::from));
    let response = dispatcher()?.decrypt(&request)?;
    print_response(&response, json)?;
    Ok(ExitCode::SUCCESS)
}

pub fn hash(algorithm: &str, text: &str, json: bool) -> Result<ExitCode> {
    let response = dispatcher()?.digest(algorithm, text)?;
    print_response(&response, json)?;
    Ok(ExitCode::SUCCESS)
}

fn format_brief(info: &AlgorithmInfo) -> String {
    format!("{} {} ({})", info.id, info.name, info.kind)
}

pub fn algorithms(json: bool) -> Result<ExitCode> {
    let catalog = Catalog::new();
    if json {
        println!("{}", serde_json::to_string(catalog.all())?);
        return Ok(ExitCode::SUCCESS);
    }
    for info in catalog.all() {
        println!("{}", format_brief(info));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn show(name: &str) -> Result<ExitCode> {
    let catalog = Catalog::new();
    let matches = catalog.search(name);
    if matches.is_empty() {
        anyhow::bail!("no algorithm matches {:?}", name);
    }
    for (i, info) in matches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", info.name, info.kind);
        println!("{}", info.description);
        println!("Key length: {}", info.key_length);
        println!("Security:   {}", info.security);
        println!("Speed:      {}", info.speed);
        println!("Use cases:  {}", info.use_cases);
        println!("Steps:");
        for (n, step) in info.steps.iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
    }
    Ok(ExitCode::SUCCESS)
}
