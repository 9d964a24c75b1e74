//! Sample C programs offered by the front end's example picker.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleProgram {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub static EXAMPLES: [ExampleProgram; 8] = [
    ExampleProgram {
        key: "memory_leak",
        name: "Memory Leak Example",
        description: "A simple example demonstrating a memory leak.",
        code: r#"#include <stdlib.h>

int main() {
  int *x = malloc(sizeof(int));
  *x = 10;

  // Memory leak: x is not freed before returning
  return 0;
}"#,
    },
    ExampleProgram {
        key: "buffer_overflow",
        name: "Buffer Overflow Example",
        description: "A simple example demonstrating a buffer overflow.",
        code: r#"#include <string.h>

int main() {
  char buffer[10];

  // Buffer overflow: copying a long string into a 10-character buffer
  strcpy(buffer, "This string is too long");

  return 0;
}"#,
    },
    ExampleProgram {
        key: "null_pointer",
        name: "Null Pointer Dereference",
        description: "A simple example demonstrating a null pointer dereference.",
        code: r#"#include <stdlib.h>

int main() {
  int *ptr = NULL;

  // Null pointer dereference
  *ptr = 42;

  return 0;
}"#,
    },
    ExampleProgram {
        key: "integer_overflow",
        name: "Integer Overflow Example",
        description: "A simple example demonstrating an integer overflow.",
        code: r#"#include <stdio.h>
#include <limits.h>

int main() {
  int a = INT_MAX;

  // Integer overflow
  int b = a + 1;

  printf("%d\n", b);
  return 0;
}"#,
    },
    ExampleProgram {
        key: "double_free",
        name: "Double Free Example",
        description: "A simple example demonstrating a double free error.",
        code: r#"#include <stdlib.h>

int main() {
  int *x = malloc(sizeof(int));
  *x = 10;

  free(x);
  // Double free: x is freed twice
  free(x);

  return 0;
}"#,
    },
    ExampleProgram {
        key: "use_after_free",
        name: "Use After Free Example",
        description: "A simple example demonstrating a use-after-free error.",
        code: r#"#include <stdlib.h>
#include <stdio.h>

int main() {
  int *x = malloc(sizeof(int));
  *x = 10;

  free(x);

  // Use after free: x is used after being freed
  printf("%d\n", *x);

  return 0;
}"#,
    },
    ExampleProgram {
        key: "division_by_zero",
        name: "Division by Zero Example",
        description: "A simple example demonstrating a division by zero error.",
        code: r#"#include <stdio.h>

int main() {
  int a = 10;
  int b = 0;

  // Division by zero
  int c = a / b;

  printf("%d\n", c);
  return 0;
}"#,
    },
    ExampleProgram {
        key: "circular_list",
        name: "Circular List Example",
        description: "An example demonstrating issues with a circular linked list.",
        code: r#"#include <stdlib.h>

typedef struct node {
  int value;
  struct node *next;
} Node;

int main() {
  // Build a circular list
  Node *head = (Node*) malloc(sizeof(Node));
  head->value = 1;

  Node *second = (Node*) malloc(sizeof(Node));
  second->value = 2;

  Node *third = (Node*) malloc(sizeof(Node));
  third->value = 3;

  head->next = second;
  second->next = third;
  third->next = head; // Creates a cycle

  // Attempt to free the list - will cause issues
  Node *current = head;
  while (current != NULL) {
    Node *temp = current;
    current = current->next;
    free(temp);
  }

  return 0;
}"#,
    },
];

pub fn all() -> &'static [ExampleProgram] {
    &EXAMPLES
}

pub fn find(key: &str) -> Option<&'static ExampleProgram> {
    EXAMPLES.iter().find(|example| example.key == key)
}
