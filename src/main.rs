// Algoscope: step-by-step algorithm tracer with terminal replay

use std::io;
use std::process::exit;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoscope::graph::{self, Edge, Graph, TraversalKind, Vertex};
use algoscope::snapshot::{ArraySnapshot, Frame, Trace};
use algoscope::sorting::{self, SortAlgorithm};
use algoscope::structures::limits::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use algoscope::structures::list::SeqList;
use algoscope::structures::{BoundedQueue, BoundedStack};
use algoscope::tree::{TraversalOrder, Tree, TreeKind};
use algoscope::ui::App;

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} <demo> [values...]", program_name);
    eprintln!();
    eprintln!("Sorting demos (1-{} integer values, defaults provided):", MAX_ARRAY_SIZE);
    eprintln!("  bubble | selection | insertion | counting | merge | quick");
    eprintln!();
    eprintln!("Graph demos (run on the built-in 5-vertex weighted graph):");
    eprintln!("  bfs | dfs | kruskal | dijkstra");
    eprintln!();
    eprintln!("Tree demos (optional traversal order, then values):");
    eprintln!("  binary | bst | avl  [preorder|inorder|postorder|levelorder] [values...]");
    eprintln!();
    eprintln!("Structure demos:");
    eprintln!("  stack | queue | list  [values...]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quick 5 3 8 1", program_name);
    eprintln!("  {} avl inorder 10 20 30", program_name);
    eprintln!("  {} dijkstra", program_name);
    exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algoscope")
        .to_string();

    let Some(demo) = args.get(1) else {
        eprintln!("Error: No demo selected");
        eprintln!();
        usage(&program_name);
    };

    let (title, trace) = match build_trace(demo, &args[2..]) {
        Ok(built) => built,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            usage(&program_name);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&title, trace);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn build_trace(demo: &str, rest: &[String]) -> Result<(String, Trace), String> {
    match demo {
        "bubble" => sorting_trace(SortAlgorithm::Bubble, rest),
        "selection" => sorting_trace(SortAlgorithm::Selection, rest),
        "insertion" => sorting_trace(SortAlgorithm::Insertion, rest),
        "counting" => sorting_trace(SortAlgorithm::Counting, rest),
        "merge" => sorting_trace(SortAlgorithm::Merge, rest),
        "quick" => sorting_trace(SortAlgorithm::Quick, rest),
        "bfs" => graph_trace(TraversalKind::Bfs),
        "dfs" => graph_trace(TraversalKind::Dfs),
        "kruskal" => kruskal_trace(),
        "dijkstra" => dijkstra_trace(),
        "binary" => tree_trace(TreeKind::Binary, rest),
        "bst" => tree_trace(TreeKind::Bst, rest),
        "avl" => tree_trace(TreeKind::Avl, rest),
        "stack" => Ok(stack_trace(rest)),
        "queue" => Ok(queue_trace(rest)),
        "list" => Ok(list_trace(rest)),
        other => Err(format!("Unknown demo '{}'", other)),
    }
}

/// Parse integer arguments, falling back to a fixed sample.
fn parse_values(rest: &[String], default: &[i64]) -> Result<Vec<i64>, String> {
    if rest.is_empty() {
        return Ok(default.to_vec());
    }
    rest.iter()
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| format!("'{}' is not an integer", raw))
        })
        .collect()
}

fn sorting_trace(algorithm: SortAlgorithm, rest: &[String]) -> Result<(String, Trace), String> {
    let values = parse_values(rest, &[5, 3, 8, 1, 9, 2, 7])?;
    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&values.len()) {
        return Err(format!(
            "Size must be between {} and {} (got {})",
            MIN_ARRAY_SIZE,
            MAX_ARRAY_SIZE,
            values.len()
        ));
    }

    // Lead with the unsorted input so the replay starts from the beginning.
    let mut trace = Trace::new(vec![Frame::Array(ArraySnapshot::from_marked(&values, &[]))]);
    for snapshot in sorting::sort(algorithm, &values) {
        trace.push(Frame::Array(snapshot));
    }
    Ok((algorithm.name().to_string(), trace))
}

/// The built-in 5-vertex weighted graph every graph demo runs on.
fn demo_graph() -> Result<Graph, String> {
    let vertices = ["1", "2", "3", "4", "5"].map(Vertex::new).to_vec();
    let edges = vec![
        Edge::new("e1-2", "1", "2", Some(2)),
        Edge::new("e1-3", "1", "3", Some(4)),
        Edge::new("e2-4", "2", "4", Some(3)),
        Edge::new("e3-5", "3", "5", Some(1)),
        Edge::new("e4-5", "4", "5", Some(2)),
    ];
    Graph::new(vertices, edges).map_err(|e| e.to_string())
}

fn graph_trace(kind: TraversalKind) -> Result<(String, Trace), String> {
    let graph = demo_graph()?;
    let steps = graph::traverse(kind, &graph, "1").map_err(|e| e.to_string())?;

    let mut trace = Trace::default();
    for step in steps {
        trace.push(Frame::Visit(step));
    }
    let title = match kind {
        TraversalKind::Bfs => "Breadth-First Search",
        TraversalKind::Dfs => "Depth-First Search",
    };
    Ok((title.to_string(), trace))
}

fn kruskal_trace() -> Result<(String, Trace), String> {
    let graph = demo_graph()?;
    let mut trace = Trace::default();
    for step in graph::mst(&graph) {
        trace.push(Frame::Mst(step));
    }
    Ok(("Kruskal's Minimum Spanning Tree".to_string(), trace))
}

fn dijkstra_trace() -> Result<(String, Trace), String> {
    let graph = demo_graph()?;
    let result = graph::shortest_path(&graph, "1").map_err(|e| e.to_string())?;

    let mut trace = Trace::default();
    for step in result.steps {
        trace.push(Frame::Visit(step));
    }

    // Close with the computed distances.
    let mut distances: Vec<(String, u64)> = result.distances.into_iter().collect();
    distances.sort();
    let summary = distances
        .iter()
        .map(|(id, d)| format!("{}: {}", id, d))
        .collect::<Vec<_>>()
        .join(", ");
    trace.push(Frame::Message(format!("Shortest distances from 1 — {}", summary)));

    Ok(("Dijkstra's Shortest Path".to_string(), trace))
}

fn tree_trace(kind: TreeKind, rest: &[String]) -> Result<(String, Trace), String> {
    // An optional traversal order may precede the values.
    let (order, value_args) = match rest.first().map(|s| s.as_str()) {
        Some("preorder") => (TraversalOrder::Preorder, &rest[1..]),
        Some("inorder") => (TraversalOrder::Inorder, &rest[1..]),
        Some("postorder") => (TraversalOrder::Postorder, &rest[1..]),
        Some("levelorder") => (TraversalOrder::LevelOrder, &rest[1..]),
        _ => (
            match kind {
                TreeKind::Binary => TraversalOrder::LevelOrder,
                TreeKind::Bst | TreeKind::Avl => TraversalOrder::Inorder,
            },
            rest,
        ),
    };
    let values = parse_values(value_args, &[5, 3, 8, 1, 4])?;

    let mut tree = Tree::new();
    for &value in &values {
        tree.insert(kind, value, None);
    }

    let sequence = tree.traverse(order);
    let mut trace = Trace::default();
    for current in 0..sequence.len() {
        trace.push(Frame::Highlight {
            values: sequence.clone(),
            current,
        });
    }

    let kind_name = match kind {
        TreeKind::Binary => "Binary Tree",
        TreeKind::Bst => "Binary Search Tree",
        TreeKind::Avl => "AVL Tree",
    };
    Ok((format!("{} — {}", kind_name, order.name()), trace))
}

fn string_args(rest: &[String], default: &[&str]) -> Vec<String> {
    if rest.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        rest.to_vec()
    }
}

/// Push every value, then pop until underflow, narrating each operation.
fn stack_trace(rest: &[String]) -> (String, Trace) {
    let values = string_args(rest, &["3", "1", "4", "1", "5", "9"]);
    let mut stack = BoundedStack::new();
    let mut trace = Trace::default();

    for value in &values {
        let _ = stack.push(value);
        trace.push(Frame::Message(format!(
            "[{}]  top: {}  size: {}  — {}",
            stack.items().join(", "),
            stack.top().unwrap_or("-"),
            stack.len(),
            stack.message()
        )));
    }
    loop {
        let result = stack.pop();
        trace.push(Frame::Message(format!(
            "[{}]  top: {}  size: {}  — {}",
            stack.items().join(", "),
            stack.top().unwrap_or("-"),
            stack.len(),
            stack.message()
        )));
        if result.is_err() {
            break;
        }
    }

    ("Bounded Stack".to_string(), trace)
}

/// Enqueue every value, then dequeue until underflow.
fn queue_trace(rest: &[String]) -> (String, Trace) {
    let values = string_args(rest, &["3", "1", "4", "1", "5", "9"]);
    let mut queue = BoundedQueue::new();
    let mut trace = Trace::default();

    for value in &values {
        let _ = queue.enqueue(value);
        trace.push(Frame::Message(format!(
            "[{}]  front: {}  size: {}  — {}",
            queue.items().collect::<Vec<_>>().join(", "),
            queue.front().unwrap_or("-"),
            queue.len(),
            queue.message()
        )));
    }
    loop {
        let result = queue.dequeue();
        trace.push(Frame::Message(format!(
            "[{}]  front: {}  size: {}  — {}",
            queue.items().collect::<Vec<_>>().join(", "),
            queue.front().unwrap_or("-"),
            queue.len(),
            queue.message()
        )));
        if result.is_err() {
            break;
        }
    }

    ("Bounded Queue".to_string(), trace)
}

fn render_list(list: &SeqList) -> String {
    if list.is_empty() {
        "Empty List".to_string()
    } else {
        format!("{} → null", list.nodes().join(" → "))
    }
}

/// Build the list up from both ends, then delete from both ends.
fn list_trace(rest: &[String]) -> (String, Trace) {
    let values = string_args(rest, &["a", "b", "c", "d"]);
    let mut list = SeqList::new();
    let mut trace = Trace::default();

    for (i, value) in values.iter().enumerate() {
        if i % 2 == 0 {
            list.insert_at_end(value);
            trace.push(Frame::Message(format!(
                "insert '{}' at end    → {}",
                value,
                render_list(&list)
            )));
        } else {
            list.insert_at_start(value);
            trace.push(Frame::Message(format!(
                "insert '{}' at start  → {}",
                value,
                render_list(&list)
            )));
        }
    }
    while !list.is_empty() {
        if list.len() % 2 == 0 {
            list.delete_at_start();
            trace.push(Frame::Message(format!(
                "delete at start       → {}",
                render_list(&list)
            )));
        } else {
            list.delete_at_end();
            trace.push(Frame::Message(format!(
                "delete at end         → {}",
                render_list(&list)
            )));
        }
    }

    ("Linked List Editor".to_string(), trace)
}
