use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use treedom::{translate, Event, Key, Screen, TreeNode, TreeOptions, TreeTheme, TreeWidget};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = sample_tree();
    let theme = TreeTheme::default();

    let mut screen = Screen::new()?;
    let mut widget = TreeWidget::new(TreeOptions::new(), screen.capabilities())
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    loop {
        let area = screen.area()?;
        let view = widget.view(&root);
        screen.draw(&view, widget.template(), &theme, area)?;

        let raw = screen.poll(Some(Duration::from_millis(100)))?;
        for event in translate(&raw) {
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
            widget.handle_event(&event, &mut root, &view, area);
        }
    }
}

fn sample_tree() -> TreeNode {
    TreeNode::new("projects")
        .child(
            TreeNode::new("backend")
                .child(TreeNode::new("api"))
                .child(TreeNode::new("storage")),
        )
        .child(
            TreeNode::new("frontend")
                .child(TreeNode::new("widgets"))
                .child(TreeNode::new("themes")),
        )
        .child(TreeNode::new("docs"))
}
