mod app;
mod cli;
mod error;
mod event;
mod model;
mod storage;
mod theme;
mod ui;

use std::io::{self, Write};
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use app::App;
use cli::Cli;
use theme::Theme;

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    let cli = Cli::parse();

    // 主题：命令行参数只影响本次会话，否则读配置
    let theme = match cli.theme {
        Some(ref name) => Theme::from_name(name),
        None => Theme::from_name(&storage::config::load_config().theme.name),
    };

    run_tui(theme)
}

/// 启动 TUI 界面
fn run_tui(theme: Theme) -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 设置终端 tab 标题
    print!("\x1b]0;tally\x07");
    let _ = io::stdout().flush();

    // 创建应用
    let mut app = App::new(theme);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    // 清除终端 tab 标题（恢复默认）
    print!("\x1b]0;\x07");
    let _ = io::stdout().flush();

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面（热区每帧重新登记）
        app.click_areas.reset();
        terminal.draw(|frame| ui::screen::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
