pub mod core;
pub mod analysis;
pub mod source;
pub mod index;
pub mod pipeline;
pub mod parallel;
pub mod query;
pub mod net;

/*
┌─────────────────────────────────────────────────────────────────────────┐
│                        TRIDEX STRUCT ARCHITECTURE                       │
└─────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── BUILD SIDE ───────────────────────────────┐
│                                                                         │
│  trait DocumentSource            struct Analyzer                        │
│  • ids() -> Vec<DocId>           • tokenizer: Box<dyn Tokenizer>        │
│  • fetch(DocId) -> String        • filters: Vec<Box<dyn TokenFilter>>   │
│    (FsDocumentSource,            • analyze(&str) -> Vec<String>         │
│     MemoryDocumentSource)                                               │
│                                                                         │
│  struct BuildCoordinator                                                │
│  • config: BuildConfig           // workers, queue_capacity             │
│  • progress: Arc<AtomicUsize>                                           │
│  • build(source, analyzer) -> (TrieIndex, BuildStats)                   │
│       workers (rayon pool): fetch → analyze → map → group              │
│       merger (caller thread): drains crossbeam channel, sole writer     │
│                                                                         │
│  pipeline: map_document() -> Vec<(String, DocId)>                       │
│            group_pairs()  -> GroupedData                                │
└─────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── INDEX ────────────────────────────────────┐
│                                                                         │
│  struct TrieIndex                 struct TrieNode                       │
│  • root: TrieNode                 • children: HashMap<char, TrieNode>   │
│  • insert(token, doc)             • postings: HashSet<DocId>            │
│  • lookup(token) -> HashSet                                             │
│  • terms() / terms_with_prefix()                                        │
│                                                                         │
│  built once, then shared read-only as Arc<TrieIndex>                    │
└─────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── QUERY SIDE ───────────────────────────────┐
│                                                                         │
│  enum QueryExpr                   struct QueryEvaluator                 │
│  • Term(String)                   • index: Arc<TrieIndex>               │
│  • And(String, String)            • search(&str) -> HashSet<DocId>      │
│  • Or(String, String)             • eval(&QueryExpr)                    │
│                                                                         │
│  struct SearchServer (net)                                              │
│  • listener: TcpListener          one tokio task per client,            │
│  • evaluator: Arc<QueryEvaluator> line in, text block out               │
└─────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── RELATIONSHIPS ────────────────────────────┐
│                                                                         │
│  DocumentSource ──text──> Analyzer ──tokens──> map/group ──channel──>   │
│      BuildCoordinator ──insert──> TrieIndex ──Arc──> QueryEvaluator     │
│                                                        │                │
│  SearchServer ──raw query line──> QueryEvaluator ──────┘                │
│                                                                         │
└─────────────────────────────────────────────────────────────────────────┘
*/
