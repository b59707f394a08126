//! Authored exam content: one row per level.
//!
//! Expected output is taken verbatim from the graders, so the subject a
//! student reads and the predicate that grades them cannot drift apart.

/// How a level's expected output is matched against captured stdout.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Every needle must occur somewhere in stdout.
    Text(&'static [&'static str]),
    /// Every needle must be a full line of stdout.
    Lines(&'static [&'static str]),
    /// Every needle must occur, and every suffix must end some line.
    TextAndLineEnds(&'static [&'static str], &'static [&'static str]),
}

impl Check {
    /// All needles in display order.
    pub fn needles(&self) -> Vec<&'static str> {
        match self {
            Check::Text(text) => text.to_vec(),
            Check::Lines(lines) => lines.to_vec(),
            Check::TextAndLineEnds(text, ends) => text.iter().chain(ends.iter()).copied().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub title: &'static str,
    pub brief: &'static str,
    pub check: Check,
    pub tip: Option<&'static str>,
}

const fn spec(
    title: &'static str,
    brief: &'static str,
    check: Check,
    tip: Option<&'static str>,
) -> LevelSpec {
    LevelSpec { title, brief, check, tip }
}

pub const TOPIC_NAMES: [&str; 20] = [
    "Basics",
    "Strings",
    "Control Flow",
    "Functions",
    "Lists",
    "Tuples & Sets",
    "Dicts",
    "Comprehensions",
    "File I/O",
    "Error Handling",
    "OOP Basics",
    "OOP Advanced",
    "Iterators",
    "Decorators",
    "Functional",
    "Regex & stdlib",
    "Dataclasses",
    "Typing",
    "Modern Python",
    "Final Challenge",
];

pub const LEVELS: [LevelSpec; 60] = [
    // Basics
    spec(
        "BASICS [1/3] : Hello & Variables",
        "Declare x=42, name=\"Miles3103\", pi=3.14, active=True.\n\
         Print a greeting, then the type of each variable using type().",
        Check::Lines(&[
            "Hello, Python World!",
            "Type: <class 'int'>",
            "Type: <class 'str'>",
            "Type: <class 'float'>",
            "Type: <class 'bool'>",
        ]),
        Some("print(type(x)) prints the type of x."),
    ),
    spec(
        "BASICS [2/3] : F-Strings & Arithmetic",
        "Given a=17, b=5, print every arithmetic operator result using f-strings.",
        Check::Lines(&[
            "17 + 5 = 22",
            "17 - 5 = 12",
            "17 * 5 = 85",
            "17 / 5 = 3.4",
            "17 // 5 = 3",
            "17 % 5 = 2",
            "17 ** 5 = 1419857",
        ]),
        Some("f\"{a} + {b} = {a+b}\". / always gives float, // is integer division."),
    ),
    spec(
        "BASICS [3/3] : Type Conversion & Truthiness",
        "Convert and print int(\"42\"), float(\"3.14\"), str(100), int(9.99),\n\
         bool(0), bool(\"\"), bool([]), bool(42). Then swap x=10, y=20 without a temp.",
        Check::Lines(&["42", "3.14", "100", "9", "False", "False", "False", "True", "x=20 y=10"]),
        Some("Python's x, y = y, x swap needs no temp variable."),
    ),
    // Strings
    spec(
        "STRINGS [1/3] : Methods & Slicing",
        "Given s = \"  Hello, Miles3103!  \", print strip/upper/lower/replace results,\n\
         the stripped length, startswith/endswith checks and the slice [7:17].",
        Check::Text(&[
            "stripped: Hello, Miles3103!",
            "upper: HELLO, MILES3103!",
            "lower: hello, miles3103!",
            "replace: Hello, World!",
            "length: 19",
            "starts: True",
            "ends: True",
            "slice [7:17]: Miles3103",
        ]),
        Some("s.strip() removes whitespace. s[7:17] slices characters 7-16."),
    ),
    spec(
        "STRINGS [2/3] : Split, Join & Format",
        "Split \"the quick brown fox\" into words, count and rejoin them.\n\
         Then print an aligned report card for Miles3103 (score 95.678, rank 3).",
        Check::Text(&[
            "words: ['the', 'quick', 'brown', 'fox']",
            "count: 4",
            "joined with -: the-quick-brown-fox",
            "Name:     Miles3103",
            "Score:    95.68",
            "Rank:     #003",
        ]),
        Some("\"sep\".join(list), f\"{score:.2f}\", f\"#{rank:03d}\""),
    ),
    spec(
        "STRINGS [3/3] : Palindrome & Anagram",
        "Write is_palindrome(s) and is_anagram(a, b), both case-insensitive and\n\
         ignoring spaces, and print their results.",
        Check::Lines(&[
            "racecar: True",
            "hello: False",
            "A man a plan a canal Panama: True",
            "listen/silent: True",
            "hello/world: False",
        ]),
        Some("s.lower().replace(\" \",\"\") to normalize."),
    ),
    // Control flow
    spec(
        "CONTROL FLOW [1/3] : if/elif + FizzBuzz",
        "Write grade(score) returning A/B/C/D/F and print it for 95, 83, 71, 55.\n\
         Then print FizzBuzz for 1-20, one value per line.",
        Check::TextAndLineEnds(
            &["95 → A", "83 → B", "71 → C", "55 → F", "FizzBuzz", "Fizz", "Buzz"],
            &["1"],
        ),
        Some("Check 15 (both) BEFORE checking 3 or 5 alone!"),
    ),
    spec(
        "CONTROL FLOW [2/3] : Loops & Patterns",
        "Print the first 10 squares on one line, a 5-row star triangle, and the\n\
         sum of all multiples of 3 or 5 below 1000.",
        Check::Text(&[
            "1 4 9 16 25 36 49 64 81 100",
            "* * * * *",
            "Sum of multiples of 3 or 5 below 1000: 233168",
        ]),
        Some("print(*[i**2 for i in range(1,11)])  for squares on one line."),
    ),
    spec(
        "CONTROL FLOW [3/3] : Recursion",
        "Write recursive factorial, fibonacci and flatten functions.",
        Check::Lines(&[
            "factorial(0) = 1",
            "factorial(7) = 5040",
            "fib(10) = 55",
            "fib sequence: [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]",
            "flatten: [1, 2, 3, 4, 5, 6]",
        ]),
        Some("for flatten: isinstance(item, list) to check if an element is a list."),
    ),
    // Functions
    spec(
        "FUNCTIONS [1/3] : *args & **kwargs",
        "Write ft_sum(*args), ft_max(*args) and build_tag(tag, content, **attrs).",
        Check::Text(&[
            "ft_sum(1,2,3,4,5) = 15",
            "ft_sum() = 0",
            "ft_max(3,1,4,1,5,9,2,6) = 9",
            "<p>Hello</p>",
            "href=\"https://42.fr\"",
            "42 School</a>",
        ]),
        Some("For build_tag, strip trailing _ from attr names (class_ → class)."),
    ),
    spec(
        "FUNCTIONS [2/3] : Closures & Higher-Order",
        "Write make_multiplier(n), make_counter(start=0) and apply_to_all(f, items).",
        Check::Lines(&[
            "double(5) = 10",
            "triple(5) = 15",
            "counter: 1 2 3 4 5",
            "squares: [1, 4, 9, 16, 25]",
        ]),
        Some("Closure: def make_mult(n): def mult(x): return x*n; return mult"),
    ),
    spec(
        "FUNCTIONS [3/3] : Lambda & Functional Tools",
        "Using only lambdas, map(), filter() and sorted(), transform\n\
         numbers = [5, 3, 8, 1, 9, 2, 7, 4, 6] and words = [\"banana\", \"apple\", \"cherry\", \"date\"].",
        Check::Lines(&[
            "evens: [8, 2, 4, 6]",
            "squares: [25, 9, 64, 1, 81, 4, 49, 16, 36]",
            "sorted words: ['date', 'apple', 'banana', 'cherry']",
            "sum of odd squares: 171",
            "case-insensitive: ['apple', 'banana', 'cherry', 'date']",
        ]),
        None,
    ),
    // Lists
    spec(
        "LISTS [1/3] : Slicing & Methods",
        "Given nums = [5, 3, 8, 1, 9, 2, 7, 4, 6], print it reversed, every other\n\
         element, sorted, its sum and its min/max.",
        Check::Text(&[
            "original: [5, 3, 8, 1, 9, 2, 7, 4, 6]",
            "reversed: [6, 4, 7, 2, 9, 1, 8, 3, 5]",
            "every other: [5, 8, 9, 7, 6]",
            "sorted: [1, 2, 3, 4, 5, 6, 7, 8, 9]",
            "sum: 45",
            "min/max: 1 / 9",
        ]),
        Some("lst[::-1] reverses. lst[::2] every other. sorted(lst) returns new list."),
    ),
    spec(
        "LISTS [2/3] : Aliasing Bug & 2D Lists",
        "Show the aliasing bug (b = a versus c = a.copy()), build a 3x3 identity\n\
         matrix, print its rows and flatten it.",
        Check::Text(&[
            "a after b[0]=99: [99, 2, 3]",
            "c after b[0]=99: [1, 2, 3]",
            "[1, 0, 0]",
            "[0, 1, 0]",
            "[0, 0, 1]",
            "flat: [1, 0, 0, 0, 1, 0, 0, 0, 1]",
        ]),
        None,
    ),
    spec(
        "LISTS [3/3] : zip, enumerate, unpacking",
        "Zip names, scores and grades into a table, enumerate the names from 1,\n\
         and unpack the scores into first, *middle, last.",
        Check::Text(&[
            "Alice: 95 (A)",
            "Bob: 82 (B)",
            "Charlie: 78 (C)",
            "Diana: 91 (A)",
            "1. Alice",
            "2. Bob",
            "3. Charlie",
            "4. Diana",
            "first=95 middle=[82, 78] last=91",
        ]),
        None,
    ),
    // Tuples & sets
    spec(
        "TUPLES & SETS [1/3] : Tuples",
        "Use a namedtuple Point, a dict keyed by coordinate tuples, and return\n\
         several statistics from one function as a tuple.",
        Check::Text(&[
            "p.x=3 p.y=7",
            "(0,0) → origin",
            "(1,0) → east",
            "min=1 max=9 sum=45 count=9",
        ]),
        Some("Tuples are immutable → hashable → usable as dict keys."),
    ),
    spec(
        "TUPLES & SETS [2/3] : Set Operations",
        "Given a = {1, 3, 5, 7, 9} and b = {3, 6, 9, 1, 7}, print their union,\n\
         intersection, differences and membership; deduplicate a list keeping order.",
        Check::Text(&[
            "union: {1, 3, 5, 6, 7, 9}",
            "intersection: {1, 3, 7, 9}",
            "difference: {5}",
            "symmetric: {5, 6}",
            "3 in a: True",
            "unique: [1, 2, 3, 4]",
        ]),
        Some("|, &, -, ^ operators or .union(), .intersection(), etc."),
    ),
    spec(
        "TUPLES & SETS [3/3] : Counter",
        "Count word and letter frequencies with collections.Counter and combine counters.",
        Check::Text(&[
            "the: 3",
            "cat: 2",
            "sat: 2",
            "s: 4",
            "i: 4",
            "p: 2",
            "m: 1",
            "{'a': 2, 'b': 3, 'c': 1}",
        ]),
        None,
    ),
    // Dicts
    spec(
        "DICTS [1/3] : Basics & Safe Access",
        "Read a person dict safely with .get(), update it, and build a dict of squares.",
        Check::Text(&[
            "age: 20",
            "score: 0",
            "level: 16",
            "rank: S",
            "score: 9850",
            "{1: 1, 2: 4, 3: 9, 4: 16, 5: 25}",
        ]),
        None,
    ),
    spec(
        "DICTS [2/3] : defaultdict & grouping",
        "Count words with defaultdict(int) and group fruits by first letter with\n\
         defaultdict(list).",
        Check::Text(&[
            "be: 3",
            "to: 3",
            "a: ['apple', 'apricot', 'avocado']",
            "b: ['banana', 'blueberry']",
            "c: ['cherry']",
        ]),
        None,
    ),
    spec(
        "DICTS [3/3] : Nested Dicts & Merging",
        "Query nested student records, sort them by score, and merge two config\n\
         dicts where the second wins.",
        Check::Text(&[
            "Alice's score: 95",
            "Bob's courses: ['math', 'english']",
            "alice: 95",
            "bob: 82",
            "charlie: 74",
            "{'color': 'blue', 'size': 20, 'debug': True}",
        ]),
        None,
    ),
    // Comprehensions
    spec(
        "COMPREHENSIONS [1/3] : List & Dict",
        "Without explicit for loops: even squares 1-20, flatten [[1,2],[3,4],[5,6]],\n\
         word lengths as a dict, and lowercase words longer than 2 letters.",
        Check::Lines(&[
            "[4, 16, 36, 64, 100, 144, 196, 256, 324, 400]",
            "[1, 2, 3, 4, 5, 6]",
            "{'python': 6, 'is': 2, 'awesome': 7}",
            "['hello', 'world', 'python']",
        ]),
        None,
    ),
    spec(
        "COMPREHENSIONS [2/3] : Generators",
        "Compare list and generator memory use, print 10..14 from a generator and\n\
         take the first 10 values of an infinite Fibonacci generator.",
        Check::Text(&[
            "list is larger: True",
            "10 11 12 13 14",
            "take(10, fib) = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]",
        ]),
        None,
    ),
    spec(
        "COMPREHENSIONS [3/3] : Data Pipeline",
        "Parse \"name,score,subject\" rows lazily, keep passing scores, attach a\n\
         letter grade and print each record. No lists between steps.",
        Check::Lines(&[
            "alice: 95 (A) - math",
            "charlie: 78 (C) - math",
            "eve: 88 (B) - math",
            "frank: 61 (D) - english",
        ]),
        None,
    ),
    // File I/O
    spec(
        "FILE I/O [1/3] : Read & Write",
        "Write 5 lines to /tmp/miles_test.txt, read them back numbered, append a\n\
         sixth line and print the last one.",
        Check::Text(&["Lines: 5", "1: Python", "3: awesome", "5: scripting", "Last: Line 6: and more!"]),
        None,
    ),
    spec(
        "FILE I/O [2/3] : JSON & CSV",
        "Round-trip a dict through /tmp/miles_data.json, then write and read a\n\
         CSV of student scores.",
        Check::Text(&[
            "name: Miles3103",
            "skills: ['C', 'C++', 'Python']",
            "score: 9850.5",
            "Alice scored 95 (A)",
            "Bob scored 82 (B)",
            "Charlie scored 78 (C)",
        ]),
        None,
    ),
    spec(
        "FILE I/O [3/3] : pathlib",
        "Using pathlib only, create /tmp/miles_proj/src, write main.py, inspect the\n\
         path parts, glob for .py files and read the file back.",
        Check::Text(&[
            "exists: True",
            "is_dir: True",
            "stem: main",
            "suffix: .py",
            "py files: 1",
            "print('hello')",
        ]),
        None,
    ),
    // Error handling
    spec(
        "ERROR HANDLING [1/3] : try/except/else/finally",
        "Write safe_divide and safe_int_parse that catch their errors, and show\n\
         a finally block that always runs.",
        Check::Text(&[
            "5.0",
            "caught: division by zero",
            "42",
            "caught: invalid literal",
            "parsed: 99",
            "always runs",
        ]),
        None,
    ),
    spec(
        "ERROR HANDLING [2/3] : Custom Exceptions",
        "Build AppError with ValidationError and NotFoundError subclasses whose\n\
         str() is \"[code] message\", and raise/catch them.",
        Check::Text(&[
            "age 25 is valid",
            "ValidationError: [400] Age -5 out of range",
            "Found Alice: 95",
            "NotFoundError: [404] Ghost not found",
        ]),
        None,
    ),
    spec(
        "ERROR HANDLING [3/3] : Context Managers",
        "Write a Timer context manager class and a managed_resource generator\n\
         context manager (contextlib).",
        Check::Text(&[
            "Timer started",
            "Timer stopped",
            "Acquiring database",
            "Using database",
            "Releasing database",
        ]),
        Some("__exit__(self, exc_type, exc_val, exc_tb) — return False to re-raise exceptions."),
    ),
    // OOP basics
    spec(
        "OOP BASICS [1/3] : Class & __init__",
        "Create BankAccount(owner, balance) with deposit, withdraw, apply_interest\n\
         and a class-level interest rate.",
        Check::Text(&[
            "[Miles3103] $1000.00",
            "[Miles3103] $1365.00",
            "Error: insufficient funds",
            "rate: 0.05",
        ]),
        None,
    ),
    spec(
        "OOP BASICS [2/3] : Dunder Methods",
        "Create Vector2D with __str__, __repr__, arithmetic, abs, negation,\n\
         equality and ordering by magnitude.",
        Check::Text(&[
            "v1 = (3, 4)",
            "v1 + v2 = (4, 6)",
            "v1 - v2 = (2, 2)",
            "v1 * 2 = (6, 8)",
            "abs(v1) = 5.0",
            "-v1 = (-3, -4)",
            "v1 == v1: True",
            "sorted:",
        ]),
        None,
    ),
    spec(
        "OOP BASICS [3/3] : @property & @classmethod",
        "Create Temperature storing Celsius, with fahrenheit/kelvin properties, a\n\
         validating setter, a from_fahrenheit classmethod and an is_valid staticmethod.",
        Check::Text(&[
            "100°C / 212.0°F / 373.15K",
            "0°C / 32.0°F / 273.15K",
            "is_valid(-300): False",
            "ValueError caught",
        ]),
        None,
    ),
    // OOP advanced
    spec(
        "OOP ADVANCED [1/3] : Inheritance",
        "Build Animal → Dog/Cat → GuideDog with speak() overrides and super().",
        Check::Text(&[
            "Dog(Rex, age=3)",
            "Rex says: Woof!",
            "Rex fetches the ball!",
            "Cat(Mia, age=5)",
            "Mia says: Meow!",
            "GuideDog(Buddy, age=4)",
            "Buddy says: Woof! (guide dog)",
        ]),
        None,
    ),
    spec(
        "OOP ADVANCED [2/3] : ABC & Polymorphism",
        "Define an abstract Shape with Circle, Rectangle and Triangle, print their\n\
         areas and sort them by area.",
        Check::Text(&[
            "Circle: area=78.54",
            "Rectangle: area=24.00",
            "Triangle: area=6.00",
            "By area: Triangle Rectangle Circle",
        ]),
        None,
    ),
    spec(
        "OOP ADVANCED [3/3] : Dataclass",
        "Create a Player dataclass with a level_up method and a default items\n\
         list, plus a Point dataclass with a distance method.",
        Check::Text(&[
            "Miles3103 → level 16",
            "Player(name='Miles3103', level=16, score=9500.0, items=['Sword', 'Shield'])",
            "distance: 5.0",
        ]),
        None,
    ),
    // Iterators
    spec(
        "ITERATORS [1/3] : Custom Iterator",
        "Create a Range class usable in for loops, with __len__ and __contains__.",
        Check::Text(&["1 2 3 4 5", "0 2 4 6 8", "5", "True", "False"]),
        None,
    ),
    spec(
        "ITERATORS [2/3] : Generator Functions",
        "Write integers_from, take, squares_gen, running_total and my_chain generators.",
        Check::Lines(&[
            "take(5, integers_from(10)) = [10, 11, 12, 13, 14]",
            "take(5, squares_gen()) = [1, 4, 9, 16, 25]",
            "running_total = [1, 3, 6, 10, 15]",
            "chain: [1, 2, 3, 4, 5, 6]",
        ]),
        None,
    ),
    spec(
        "ITERATORS [3/3] : itertools",
        "Use itertools chain, islice, combinations, permutations and product.",
        Check::Text(&[
            "chain: [1, 2, 3, 4, 5, 6]",
            "islice: [10, 11, 12, 13, 14]",
            "combinations(4,2): 6 items",
            "permutations(ABC,2): 6 items",
            "product 2x3: 6 pairs",
        ]),
        None,
    ),
    // Decorators
    spec(
        "DECORATORS [1/3] : Basic Decorator",
        "Write @timer and @logger decorators preserving metadata with\n\
         functools.wraps; stack them on compute(n).",
        Check::Text(&[
            "Calling compute",
            "compute returned 499999500000",
            "compute took",
            "function name: compute",
        ]),
        None,
    ),
    spec(
        "DECORATORS [2/3] : Decorators with Arguments",
        "Write @repeat(n), @validate_types(...) and @retry(times) decorators.",
        Check::Text(&[
            "hello\nhello\nhello",
            "Registered Alice",
            "TypeError: age must be int",
            "Attempt 1 failed",
            "Attempt 2 failed",
            "Success on attempt 3",
        ]),
        None,
    ),
    spec(
        "DECORATORS [3/3] : @lru_cache & functools",
        "Compare slow and lru_cache Fibonacci, build square/cube with partial and\n\
         use reduce for product and maximum.",
        Check::Text(&[
            "fib_fast(30) = 832040",
            "square(5) = 25.0",
            "cube(3) = 27.0",
            "product: 120",
            "largest: 9",
        ]),
        None,
    ),
    // Functional
    spec(
        "FUNCTIONAL [1/3] : map, filter, reduce",
        "Without loops, process nums = range(1, 11) with map, filter and reduce.",
        Check::Lines(&[
            "even squares: [4, 16, 36, 64, 100]",
            "sum of odds: 25",
            "10! = 3628800",
            "max even square: 100",
            "strings: ['1', '2', '3', '4', '5', '6', '7', '8', '9', '10']",
        ]),
        None,
    ),
    spec(
        "FUNCTIONAL [2/3] : Currying & Composition",
        "Curry an adder, and write compose (right to left) and pipe (left to right).",
        Check::Lines(&[
            "add5(3) = 8",
            "add5(10) = 15",
            "compose(double,add1,square)(3) = 20",
            "pipe(square,add1,double)(3) = 20",
        ]),
        None,
    ),
    spec(
        "FUNCTIONAL [3/3] : Memoization from scratch",
        "Write a memoize decorator without lru_cache that reports cache hits and\n\
         misses, and apply it to a recursive fib.",
        Check::Text(&["cache miss", "cache hit", "fib(20) = 6765"]),
        None,
    ),
    // Regex & stdlib
    spec(
        "REGEX [1/3] : Pattern Matching",
        "Extract emails, parse a date with named groups and redact phone numbers\n\
         from a contact string.",
        Check::Text(&[
            "emails: ['alice@example.com', 'bob@test.org']",
            "year=2001 month=03 day=15",
            "[REDACTED]",
        ]),
        None,
    ),
    spec(
        "REGEX [2/3] : String Processing",
        "Validate emails and passwords, extract integers and tokenize an expression.",
        Check::Text(&[
            "user@example.com: True",
            "notanemail: False",
            "Hello1!: False",
            "Hello123!: True",
            "integers: [3, 12, 1]",
            "tokens: ['x', '=', '3', '+', 'y', '*', '(', 'z', '-', '1', ')']",
        ]),
        None,
    ),
    spec(
        "STDLIB [3/3] : datetime, random, argparse",
        "Print today's date and date arithmetic, seeded random values, and parse\n\
         arguments with argparse.",
        Check::Text(&[
            "today is 20",
            "in 30 days:",
            "days since 2000-01-01:",
            "random int 1-100: 2",
            "random choice: scissors",
            "Hello, Miles3103!",
        ]),
        None,
    ),
    // Dataclasses
    spec(
        "DATACLASSES [1/3] : Basic",
        "Create a Student dataclass with an average property and a ClassVar counter.",
        Check::Text(&[
            "Student(Alice, id=1, avg=87.5)",
            "Student(Bob, id=2, avg=75.0)",
            "Total students: 2",
            "True",
        ]),
        None,
    ),
    spec(
        "DATACLASSES [2/3] : Frozen & Ordering",
        "Create a frozen, ordered Point dataclass; sort points, take the minimum and\n\
         show that mutation fails.",
        Check::Text(&[
            "sorted: [Point(x=0, y=0), Point(x=1, y=1), Point(x=2, y=3), Point(x=3, y=4)]",
            "min: Point(x=0, y=0)",
            "distance: 5.0",
            "FrozenInstanceError caught",
        ]),
        None,
    ),
    spec(
        "DATACLASSES [3/3] : Serialization",
        "Serialize a Profile dataclass with asdict to JSON and load it back.",
        Check::Lines(&["Miles3103", "Warsaw", "['coding', 'chess']", "True"]),
        None,
    ),
    // Typing
    spec(
        "TYPING [1/3] : Type Hints",
        "Write fully annotated greet, find_max, merge_dicts and describe functions.",
        Check::Text(&[
            "Hello, Miles3103!\nHello, Miles3103!",
            "5\nNone",
            "{'a': 1, 'b': 2}",
            "42 <class 'int'>",
            "3.14 <class 'float'>",
            "hi <class 'str'>",
        ]),
        None,
    ),
    spec(
        "TYPING [2/3] : Protocols & TypeVar",
        "Write a generic Stack[T] and a runtime-checkable Drawable protocol.",
        Check::Text(&[
            "Stack size: 2, top: 2",
            "True\nFalse",
            "Drawing Circle",
            "Drawing Square",
        ]),
        None,
    ),
    spec(
        "TYPING [3/3] : TypedDict & Literal",
        "Use a TypedDict record, a Literal-typed log level setter and get_type_hints.",
        Check::Text(&[
            "{'name': 'Alice', 'age': 30, 'role': 'admin'}",
            "Log level set to INFO",
            "Log level set to DEBUG",
            "'return': <class 'bool'>",
        ]),
        None,
    ),
    // Modern Python
    spec(
        "MODERN PYTHON [1/3] : Walrus & Match",
        "Drain a list with the walrus operator and dispatch commands with match/case.",
        Check::Text(&[
            "got: hello",
            "got: world",
            "got: python",
            "Quitting",
            "Going to north",
            "Listing: ['files', 'dirs']",
            "Unknown",
        ]),
        None,
    ),
    spec(
        "MODERN PYTHON [2/3] : Enum & NamedTuple",
        "Define Color and Direction enums and a typed NamedTuple Point with a method.",
        Check::Text(&[
            "Color.RED\nRED\n1",
            "Direction.SOUTH",
            "Point(x=3, y=4, label='A')",
            "5.0",
            "x=3 y=4 label=A",
        ]),
        None,
    ),
    spec(
        "MODERN PYTHON [3/3] : Async Basics",
        "Write coroutines with asyncio: a greeting, concurrent fetches with\n\
         gather, and an async generator.",
        Check::Text(&[
            "Hello, Miles3103!",
            "data from site1",
            "data from site2",
            "data from site3",
            "0 1 2 3 4",
        ]),
        None,
    ),
    // Final challenge
    spec(
        "FINAL CHALLENGE [1/3] : Design Patterns",
        "Implement a Singleton config, an Observer event bus and a Strategy sorter.",
        Check::Text(&[
            "dark",
            "True",
            "event received:",
            "[1, 1, 2, 3, 4, 5, 6, 9]",
            "[9, 6, 5, 4, 3, 2, 1, 1]",
        ]),
        None,
    ),
    spec(
        "FINAL CHALLENGE [2/3] : sqlite3 + ORM-like layer",
        "Build a minimal task repository over an in-memory sqlite3 database.",
        Check::Text(&["[x] Learn Python", "[ ] Build projects", "total: 2"]),
        None,
    ),
    spec(
        "FINAL BOSS *** : Full Pipeline",
        "Combine validated dataclasses, lazy generators, decorators and grouping\n\
         into a report of passing students per subject.",
        Check::Text(&[
            "PASSING STUDENTS: 6",
            "art:",
            "avg: 78.0",
            "top: Grace (95)",
            "math:",
            "avg: 82.25",
            "top: Alice (92)",
            "You have mastered Python",
        ]),
        None,
    ),
];
