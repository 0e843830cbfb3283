use rbtree::RBTree;

fn main() {
    env_logger::init();

    let mut tree = RBTree::new(|a: &i32, b: &i32| a.cmp(b));
    for key in &[2, 11, 6, 10, 26, 7, 18, 8, 13, 22, 12, 15, 17] {
        tree.insert(*key);
    }
    print!("{}", tree.dump_as_dot());
}
