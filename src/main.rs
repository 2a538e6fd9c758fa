use std::io::BufRead;

use anyhow::Result;
use log::info;

use aigg_plugins::action::ActionOptions;
use aigg_plugins::{
    aigg_plugin, insights_plugin, IncomingMessage, PluginConfig, PluginContext, SessionState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    env_logger::init();

    info!("启动 AIGG 插件演示宿主...");

    // 读取配置并构建依赖上下文
    let config = PluginConfig::from_env();
    let ctx = PluginContext::from_config(&config)?;

    // 注册插件；insights 的校验最宽松，放在最后兜底
    let plugins = vec![aigg_plugin(&ctx), insights_plugin(&ctx)];

    // 每个会话一份状态，宿主负责保管和销毁
    let mut state = SessionState::default();
    let options = ActionOptions::new();

    println!("输入消息（Ctrl-D 退出）:");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let message = IncomingMessage::new(text);

        let action = plugins
            .iter()
            .flat_map(|p| p.actions.iter())
            .find(|a| a.validate(&message, Some(&state)));

        match action {
            Some(action) => {
                let reply = action.handle(&message, &mut state, &options).await;
                println!("[{}] {}\n", action.name(), reply.text);
            }
            None => println!("(没有动作接受这条消息)\n"),
        }
    }

    Ok(())
}
