use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::oneshot;
use treedom::{
    find_node_mut, find_parent, translate, Event, Key, RemoveDecision, Screen, TreeEvent,
    TreeNode, TreeOptions, TreeTheme, TreeWidget, DEFAULT_NODES_PROPERTY,
};

const NODES: &str = DEFAULT_NODES_PROPERTY;

/// Interactive tree: click to expand/select, drag a node onto another to
/// move it, `a` adds under the selection, `d` asks to remove it (`y`/`n`
/// answers), `q` quits.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("treedom-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut root = sample_tree();
    let theme = TreeTheme::default();

    // Removals are confirmed asynchronously: the callback parks a sender
    // here and the y/n keybinds answer it.
    let pending_confirm: Rc<RefCell<Option<oneshot::Sender<bool>>>> = Rc::new(RefCell::new(None));
    let confirm_slot = pending_confirm.clone();

    let options = TreeOptions::new()
        .on_node_select(|node| {
            log::info!(
                "selected {}",
                node.display_value("name").unwrap_or_default()
            );
        })
        .on_add(|node| {
            log::info!(
                "add requested under {}",
                node.display_value("name").unwrap_or_default()
            );
        })
        .on_remove(move |node, parent| {
            if confirm_slot.borrow().is_some() {
                return RemoveDecision::Cancel;
            }
            log::info!(
                "confirm removal of {} (child of {})",
                node.display_value("name").unwrap_or_default(),
                parent
                    .and_then(|p| p.display_value("name"))
                    .unwrap_or("the top level"),
            );
            let (tx, rx) = oneshot::channel();
            *confirm_slot.borrow_mut() = Some(tx);
            RemoveDecision::Deferred(rx)
        });

    let mut screen = Screen::new()?;
    let mut widget = TreeWidget::new(options, screen.capabilities())?;

    let mut counter = 0u32;

    loop {
        let area = screen.area()?;
        let view = widget.view(&root);
        screen.draw(&view, widget.template(), &theme, area)?;

        let mut tree_events = widget.poll_removals();

        let raw = screen.poll(Some(Duration::from_millis(100)))?;
        for event in translate(&raw) {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('a'),
                    ..
                } => tree_events.extend(widget.request_add(&root)),
                Event::Key {
                    key: Key::Char('d') | Key::Delete,
                    ..
                } => tree_events.extend(widget.request_remove(&root)),
                Event::Key {
                    key: Key::Char('y'),
                    ..
                } => answer(&pending_confirm, true),
                Event::Key {
                    key: Key::Char('n'),
                    ..
                } => answer(&pending_confirm, false),
                _ => tree_events.extend(widget.handle_event(&event, &mut root, &view, area)),
            }
        }

        // The widget only asks; the model belongs to us, so the actual
        // insertions and deletions happen here.
        for tree_event in tree_events {
            match tree_event {
                TreeEvent::AddRequested { node } => {
                    counter += 1;
                    if let Some(parent) = find_node_mut(&mut root, &node, NODES) {
                        parent.push_child(NODES, TreeNode::new(format!("item-{counter}")));
                    }
                }
                TreeEvent::Removed { node } => remove_from_tree(&mut root, &node),
                other => log::debug!("{other:?}"),
            }
        }
    }
}

fn answer(slot: &Rc<RefCell<Option<oneshot::Sender<bool>>>>, keep_going: bool) {
    if let Some(tx) = slot.borrow_mut().take() {
        let _ = tx.send(keep_going);
    }
}

fn remove_from_tree(root: &mut TreeNode, id: &str) {
    let Some(parent_id) = find_parent(root, id, NODES).map(|p| p.id.clone()) else {
        return;
    };
    if let Some(parent) = find_node_mut(root, &parent_id, NODES) {
        parent.remove_child(NODES, id);
    }
}

fn sample_tree() -> TreeNode {
    TreeNode::new("workspace")
        .child(
            TreeNode::new("services")
                .child(TreeNode::new("gateway"))
                .child(
                    TreeNode::new("billing")
                        .child(TreeNode::new("invoices"))
                        .child(TreeNode::new("payments")),
                ),
        )
        .child(
            TreeNode::new("libraries")
                .child(TreeNode::new("protocol"))
                .child(TreeNode::new("storage")),
        )
        .child(TreeNode::new("tools"))
}
