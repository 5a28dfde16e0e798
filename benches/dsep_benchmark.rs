use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsep::{find_d_separation, BayesNet};

// Simple stdlib-based implementation for comparison: parent/child lists in
// `Vec`s and linear-scan membership, the way a first draft would write it.
struct ScanNet {
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
}

impl ScanNet {
    fn from_adjacency(adj: &[Vec<usize>]) -> Self {
        let mut parents = vec![Vec::new(); adj.len()];
        let mut children = vec![Vec::new(); adj.len()];
        for (u, row) in adj.iter().enumerate() {
            for &v in row {
                children[u].push(v);
                parents[v].push(u);
            }
        }
        Self { parents, children }
    }

    fn d_separated(&self, src: usize, obs: &[usize]) -> Vec<usize> {
        let mut ancestors: Vec<usize> = Vec::new();
        let mut queue: Vec<usize> = obs.to_vec();
        while let Some(node) = queue.pop() {
            if !ancestors.contains(&node) {
                ancestors.push(node);
                queue.extend_from_slice(&self.parents[node]);
            }
        }

        let mut visited: Vec<(usize, bool)> = Vec::new();
        let mut reachable: Vec<usize> = Vec::new();
        let mut queue = std::collections::VecDeque::from([(src, true)]);
        while let Some((node, up)) = queue.pop_front() {
            if visited.contains(&(node, up)) {
                continue;
            }
            visited.push((node, up));
            let observed = obs.contains(&node);
            if !observed && !reachable.contains(&node) {
                reachable.push(node);
            }
            if up && !observed {
                queue.extend(self.parents[node].iter().map(|&p| (p, true)));
                queue.extend(self.children[node].iter().map(|&c| (c, false)));
            } else if !up {
                if !observed {
                    queue.extend(self.children[node].iter().map(|&c| (c, false)));
                }
                if ancestors.contains(&node) {
                    queue.extend(self.parents[node].iter().map(|&p| (p, true)));
                }
            }
        }

        (0..self.parents.len())
            .filter(|i| *i != src && !reachable.contains(i) && !obs.contains(i))
            .collect()
    }
}

/// Layered DAG: `layers` layers of `width` nodes, each node feeding the next
/// layer's node at the same position and its right neighbour.
fn layered(layers: usize, width: usize) -> Vec<Vec<usize>> {
    let n = layers * width;
    (0..n)
        .map(|u| {
            let (layer, pos) = (u / width, u % width);
            if layer + 1 == layers {
                return Vec::new();
            }
            let next = (layer + 1) * width;
            let mut row = vec![next + pos];
            if pos + 1 < width {
                row.push(next + pos + 1);
            }
            row
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("d_separation");
    for &(layers, width) in &[(8, 8), (32, 16), (64, 64)] {
        let adj = layered(layers, width);
        let n = adj.len();
        // Observe every other node of the middle layer.
        let mid = (layers / 2) * width;
        let obs: Vec<usize> = (mid..mid + width).step_by(2).collect();

        let net = BayesNet::from_adjacency(&adj).unwrap();
        group.bench_with_input(BenchmarkId::new("bayes_net", n), &obs, |b, obs| {
            b.iter(|| black_box(net.d_separated(black_box(0), obs).unwrap()));
        });

        let scan = ScanNet::from_adjacency(&adj);
        group.bench_with_input(BenchmarkId::new("linear_scan", n), &obs, |b, obs| {
            b.iter(|| black_box(scan.d_separated(black_box(0), obs)));
        });
    }
    group.finish();
}

fn bench_build_and_query(c: &mut Criterion) {
    let adj = layered(32, 16);
    let obs: Vec<usize> = (256..272).collect();

    c.bench_function("find_d_separation_end_to_end", |b| {
        b.iter(|| black_box(find_d_separation(black_box(&adj), 0, &obs).unwrap()));
    });
}

fn bench_batch(c: &mut Criterion) {
    let adj = layered(32, 16);
    let net = BayesNet::from_adjacency(&adj).unwrap();
    let queries: Vec<(usize, Vec<usize>)> = (0..16).map(|s| (s, vec![256 + s])).collect();

    c.bench_function("d_separated_batch_16", |b| {
        b.iter(|| black_box(net.d_separated_batch(black_box(&queries))));
    });
}

criterion_group!(benches, bench_query, bench_build_and_query, bench_batch);
criterion_main!(benches);
