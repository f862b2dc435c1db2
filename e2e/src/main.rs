use blocklist::{
    managers::{InMemoryAccountManager, InMemorySortedSetManager},
    Blocks, BlocksConfig,
};
use log::info;
use serde_json::json;

#[tokio::main]
async fn main() {
    env_logger::builder().parse_filters("info").init();

    let config = BlocksConfig::default();
    let mut blocks = Blocks::builder()
        .sets(InMemorySortedSetManager::default())
        .accounts(InMemoryAccountManager::default())
        .cache(config.create_cache())
        .build();

    let alice = 1;
    let bob = 2;
    let charlie = 3;

    let list = blocks.block(bob, alice).await.expect("can block");
    info!("alice's block list: {list:?}");

    let posts = vec![
        json!({"uid": bob, "content": "hidden"}),
        json!({"uid": charlie, "content": "visible"}),
    ];
    let visible = blocks.filter(alice, posts).await.expect("can filter");
    info!("alice sees: {visible:?}");

    let list = blocks.unblock(bob, alice).await.expect("can unblock");
    info!("alice's block list: {list:?}");
}
