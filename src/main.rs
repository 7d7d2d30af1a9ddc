mod app;
mod cli;
mod config;
mod edit_state;
mod error;
mod event;
mod model;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use theme::Theme;

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置（失败回退默认值，警告走 stderr，此时还没进 raw mode）
    let config = config::load_config();
    let theme = resolve_theme(&cli, &config);

    let mut app = App::new(cli.filter.into(), theme);

    // 初始化终端
    let mut terminal = ratatui::init();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

/// 主题优先级：--theme 参数 > 配置文件 > 默认
fn resolve_theme(cli: &Cli, config: &config::Config) -> Theme {
    if let Some(name) = cli.theme.as_deref() {
        match Theme::from_name(name) {
            Some(theme) => return theme,
            None => eprintln!("Warning: unknown theme '{}', falling back", name),
        }
    }

    config
        .theme
        .name
        .as_deref()
        .and_then(Theme::from_name)
        .unwrap_or_default()
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::home::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
