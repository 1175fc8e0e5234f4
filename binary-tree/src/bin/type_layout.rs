use binary_tree::record::Record;
use type_layout::TypeLayout;

fn main() {
    println!("{}", Record::type_layout());
    println!("{} bytes per node on disk", Record::SIZE);
}
