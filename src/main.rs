use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use modern_page_copy::utils::logging;
use modern_page_copy::{App, Config, CopyOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let app = App::initialize(config)?;

    // 页面名称：命令行参数，否则从标准输入读取
    let page_name = match std::env::args().nth(1) {
        Some(name) => name,
        None => prompt(app.field_title())?,
    };

    let submission = app.submit(&page_name).await?;

    match submission.outcome {
        CopyOutcome::Copied(_) => println!("{}", submission.page_url),
        CopyOutcome::TemplateNotFound => {
            eprintln!("模板页面不存在，已创建空白页面");
            println!("{}", submission.page_url);
        }
        CopyOutcome::DestinationNotFound => {
            anyhow::bail!("创建后未能找到页面 {}", submission.page_url);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("无法读取页面名称")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
